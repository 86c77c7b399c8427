use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Frontend, Settings};

/// Log file used while the TUI owns the terminal.
pub const LOG_FILE: &str = "mowajih.log";

/// Install the global subscriber.
///
/// The TUI draws on the alternate screen, so its logs go to [`LOG_FILE`] in
/// the working directory. The returned guard flushes that file on drop and
/// must be held until exit.
pub fn init(settings: &Settings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;

    match settings.frontend {
        Frontend::Tui => {
            let appender = tracing_appender::rolling::never(".", LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .init();
            Ok(Some(guard))
        }
        Frontend::Cli => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}
