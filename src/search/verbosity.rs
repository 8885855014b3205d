use clap;

/// How much the solver reports on stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Silent,
    /// Search start, periodic progress and the final summary.
    #[default]
    Normal,
    /// Adds per-puzzle details such as the initial heuristic value.
    Verbose,
    /// Adds one record per expansion (g, h, f, frontier and explored sizes).
    Trace,
}

impl Verbosity {
    /// Whether the per-expansion trace should be switched on in the search
    /// engine, independently of what the subscriber would let through.
    pub fn traces_expansions(self) -> bool {
        self == Verbosity::Trace
    }
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Trace => tracing::Level::TRACE,
        }
    }
}
