use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::PageFiltersConfig;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
///
/// With `log_dir` set, output goes to a daily rolling file and the returned
/// guard must be held for the lifetime of the process.
pub fn init_tracing(cfg: &PageFiltersConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    match &cfg.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "page-filters.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .try_init();
            Some(guard)
        }
        None => {
            let _ = fmt().with_env_filter(filter).with_target(true).try_init();
            None
        }
    }
}
