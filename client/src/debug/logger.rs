//! Subscriber initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL};

/// Initialize the logging system
///
/// With `log_dir` set, events go to `<log_dir>/voxia-client.log` with daily rotation
/// through a non-blocking writer; the returned guard must be kept alive for the
/// lifetime of the program or buffered lines are lost. Otherwise events go to stderr,
/// leaving stdout to command output.
///
/// Calling this twice is harmless: the second call leaves the first subscriber in place.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let guard = match &config.log_dir {
        Some(dir) => {
            if let Err(e) = fs::create_dir_all(dir) {
                eprintln!("Warning: Failed to create log directory {}: {}", dir.display(), e);
                return None;
            }

            let file_appender = tracing_appender::rolling::daily(dir, "voxia-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(config.with_source)
                .with_line_number(config.with_source)
                .with_ansi(false); // No ANSI codes in log files

            if tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .try_init()
                .is_err()
            {
                return None;
            }
            Some(guard)
        }
        None => {
            // Targets only when debugging
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.is_debug_enabled())
                .with_file(config.with_source)
                .with_line_number(config.with_source);

            if tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .try_init()
                .is_err()
            {
                return None;
            }
            None
        }
    };

    tracing::debug!(
        log_level = %config.log_level,
        log_dir = ?config.log_dir,
        debug = config.is_debug_enabled(),
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Log panics through tracing before the default hook runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
