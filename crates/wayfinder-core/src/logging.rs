use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Counters collected while an explorer runs.
///
/// Explorers own their stats for the duration of one call and emit them
/// through [`log_search_stats!`] before returning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Items pushed onto the frontier
    pushes: u64,
    /// Items popped from the frontier
    pops: u64,
    /// Popped items discarded because their vertex was already finalized
    stale: u64,
    /// Vertices recorded in the discovery ledger
    finalized: u64,
    /// Largest frontier size observed
    max_frontier: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frontier push, given the frontier length after the push
    pub fn record_push(&mut self, frontier_len: usize) {
        self.pushes += 1;
        self.max_frontier = self.max_frontier.max(frontier_len);
    }

    pub fn record_pop(&mut self) {
        self.pops += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale += 1;
    }

    pub fn record_finalized(&mut self) {
        self.finalized += 1;
    }

    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    pub fn pops(&self) -> u64 {
        self.pops
    }

    pub fn stale(&self) -> u64 {
        self.stale
    }

    pub fn finalized(&self) -> u64 {
        self.finalized
    }

    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }
}

/// Log search statistics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let mut stats = SearchStats::new();
/// // ... run the search ...
/// log_search_stats!(&stats, "dijkstra");
/// ```
#[macro_export]
macro_rules! log_search_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            search = $name,
            pushes = $stats.pushes(),
            pops = $stats.pops(),
            stale = $stats.stale(),
            finalized = $stats.finalized(),
            max_frontier = $stats.max_frontier(),
            "search_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "load_graph");
/// // Or with additional fields:
/// trace_time!(start, "load_graph", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "wayfinder=debug,wayfinder_core=debug",
        (false, None) => "wayfinder=warn,wayfinder_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Expand a bare level ("debug") into directives for both crates.
fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wayfinder={level},wayfinder_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG first, then WAYFINDER_LOG
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WAYFINDER_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
