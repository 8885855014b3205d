use astar_sudoku::sudoku::{check_solution, parse_puzzles, Grid};
use clap::Parser;
use std::{path::Path, process::ExitCode};

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[arg(help = "The puzzle, as a grid line or a file whose first puzzle line is used")]
    puzzle: String,
    #[arg(help = "The solution, as a grid line or a file whose first puzzle line is used")]
    solution: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let grids = read_grid(&cli.puzzle).and_then(|puzzle| {
        read_grid(&cli.solution).map(|solution| (puzzle, solution))
    });
    let (puzzle, solution) = match grids {
        Ok(grids) => grids,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match check_solution(&puzzle, &solution) {
        Ok(()) => {
            println!("Solution is valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Solution is invalid: {}", e);
            print!("{}", solution);
            ExitCode::FAILURE
        }
    }
}

fn read_grid(argument: &str) -> Result<Grid, String> {
    let path = Path::new(argument);
    if path.is_file() {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        return parse_puzzles(&text)
            .into_iter()
            .next()
            .ok_or_else(|| format!("no puzzle line found in {}", path.display()));
    }
    argument
        .parse()
        .map_err(|e| format!("invalid grid {:?}: {}", argument, e))
}
