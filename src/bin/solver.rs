use astar_sudoku::search::{
    search_engines::SearchEngine, validate_path, AStar, AStarConfig, SearchMetrics, SearchResult,
    Verbosity,
};
use astar_sudoku::sudoku::{
    check_solution, generate_random_grid, parse_puzzles, Grid, SudokuHeuristicName,
    SudokuProblem, CLASSIC_BLOCK,
};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve Sudoku puzzles with A* search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The heuristic to guide the search with",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = SudokuHeuristicName::EmptyCells
    )]
    heuristic_name: SudokuHeuristicName,
    #[arg(
        help = "A TOML file with search engine options, command line flags take \
        precedence over it",
        short = 'C',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "Maximum number of expansions per puzzle",
        short = 'i',
        long = "iteration-limit",
        id = "ITERATION_LIMIT"
    )]
    iteration_limit: Option<usize>,
    #[arg(
        help = "Count edges on which the heuristic is inconsistent",
        long = "check-consistency"
    )]
    check_consistency: bool,
    #[arg(
        help = "Log g, h, f and the frontier and explored sizes of every expansion",
        short = 't',
        long = "trace"
    )]
    trace: bool,
    #[arg(
        help = "Write one JSON record per puzzle with outcome and search metrics",
        short = 'm',
        long = "metrics",
        id = "METRICS"
    )]
    metrics: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level, `trace` logs every expansion",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every puzzle in a file. Puzzles are lines of 81 digits or dots,
    /// with `0` or `.` for empty cells; other lines are skipped.
    File {
        #[arg(help = "The puzzle file")]
        path: PathBuf,
    },
    /// Solve a randomly generated puzzle.
    Random {
        #[arg(
            help = "Number of given cells",
            short = 'n',
            long = "clues",
            default_value_t = 30
        )]
        clues: usize,
        #[arg(help = "Seed of the puzzle generator", short = 's', long = "seed")]
        seed: Option<u64>,
        #[arg(
            help = "How many puzzles to generate",
            long = "count",
            default_value_t = 1
        )]
        count: usize,
    },
}

#[derive(Debug, Serialize)]
struct PuzzleRecord {
    puzzle: String,
    outcome: &'static str,
    steps: Option<usize>,
    seconds: f64,
    #[serde(flatten)]
    metrics: SearchMetrics,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<AStarConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => AStarConfig::load(path)?,
        None => AStarConfig::default(),
    };
    if let Some(iteration_limit) = cli.iteration_limit {
        config.iteration_limit = iteration_limit;
    }
    config.verbose |= cli.trace || cli.verbosity.traces_expansions();
    config.check_consistency |= cli.check_consistency;
    config.validate()?;
    Ok(config)
}

fn load_puzzles(command: &Commands) -> Result<Vec<Grid>, Box<dyn std::error::Error>> {
    match command {
        Commands::File { path } => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read puzzle file {}: {}", path.display(), e))?;
            let puzzles = parse_puzzles(&text);
            info!(num_puzzles = puzzles.len(), "parsed puzzle file");
            Ok(puzzles)
        }
        Commands::Random { clues, seed, count } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            Ok((0..*count)
                .map(|_| generate_random_grid(&mut rng, CLASSIC_BLOCK, *clues))
                .collect())
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let puzzles = load_puzzles(&cli.command)?;
    if puzzles.is_empty() {
        return Err("no puzzles to solve".into());
    }

    let mut metrics_writer = match &cli.metrics {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let mut solved = 0;
    for (index, puzzle) in puzzles.iter().enumerate() {
        println!("Puzzle {}:", index + 1);
        print!("{}", puzzle);

        let problem = SudokuProblem::new(puzzle.clone());
        let mut heuristic = cli.heuristic_name.create();
        let mut engine = AStar::new(config.clone());

        let start = Instant::now();
        let (result, statistics) = engine.search(&problem, heuristic.as_mut());
        let elapsed = start.elapsed();

        if report(&problem, &result, elapsed)? {
            solved += 1;
        }

        if let Some(writer) = metrics_writer.as_mut() {
            let record = PuzzleRecord {
                puzzle: puzzle.to_line(),
                outcome: result.outcome(),
                steps: result.steps(),
                seconds: elapsed.as_secs_f64(),
                metrics: statistics.metrics(),
            };
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)?;
        }
    }
    if let Some(mut writer) = metrics_writer {
        writer.flush()?;
    }

    info!(solved, total = puzzles.len());
    println!("Solved {} of {} puzzles", solved, puzzles.len());
    Ok(())
}

/// Print the outcome of one search. Returns whether a valid solution was
/// found; an invalid one is an error.
fn report(
    problem: &SudokuProblem,
    result: &SearchResult<Grid>,
    elapsed: Duration,
) -> Result<bool, Box<dyn std::error::Error>> {
    let elapsed = humantime::format_duration(Duration::from_micros(elapsed.as_micros() as u64));
    match result {
        SearchResult::Success(path) => {
            info!("validating solution");
            validate_path(problem, path)?;
            let solution = path.last().ok_or("empty solution path")?;
            check_solution(problem.puzzle(), solution)?;
            info!("solution is valid");

            println!(
                "Solved with A* in {} steps ({}):",
                path.len() - 1,
                elapsed
            );
            print!("{}", solution);
            Ok(true)
        }
        SearchResult::ProvablyUnsolvable => {
            println!("No solution exists ({})", elapsed);
            Ok(false)
        }
        SearchResult::IterationLimitReached => {
            println!("Iteration limit reached before a solution was found ({})", elapsed);
            Ok(false)
        }
    }
}
