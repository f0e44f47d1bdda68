use super::SearchIterationInfo;

/// Receives a report after every completed iteration.
pub trait SearchLogger {
    fn info(&self, info: &SearchIterationInfo);
}

/// Forwards iteration reports to the `log` facade.
#[cfg(feature = "logging")]
pub struct LogLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchIterationInfo) {
        ::log::info!(
            "depth {} score {} nodes {} qnodes {} nps {} hashfull {} time {} best {}",
            info.depth,
            info.score,
            info.nodes,
            info.qnodes,
            info.nps,
            info.hashfull,
            info.time_ms,
            info.best_move.map_or_else(|| "-".to_string(), |mv| mv.to_string())
        );
    }
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchIterationInfo) {
        println!(
            "info depth {} score {} nodes {} nps {} hashfull {} time {} best {}",
            info.depth,
            info.score.get(),
            info.nodes + info.qnodes,
            info.nps,
            info.hashfull,
            info.time_ms,
            info.best_move.map_or_else(|| "-".to_string(), |mv| mv.to_string())
        );
    }
}

/// `log::debug!` when the `logging` feature is on, nothing otherwise.
macro_rules! search_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)*);
    };
}

/// `log::warn!` when the `logging` feature is on, nothing otherwise.
macro_rules! search_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        ::log::warn!($($arg)*);
    };
}

pub(crate) use search_debug;
pub(crate) use search_warn;
