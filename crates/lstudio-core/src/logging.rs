//! Logging configuration using tracing

use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Crates whose events pass the default filter at the chosen level
const LSTUDIO_TARGETS: [&str; 4] = ["layout_studio", "lstudio_app", "lstudio_tui", "lstudio_core"];

/// How the binary was started. Each mode logs to its own file so a
/// scripted headless run never interleaves with an open editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Editor,
    Headless,
}

impl RunMode {
    fn file_prefix(self) -> &'static str {
        match self {
            RunMode::Editor => "lstudio.log",
            RunMode::Headless => "lstudio-headless.log",
        }
    }

    /// Level for the lstudio crates when `LSTUDIO_LOG` is unset.
    ///
    /// The editor logs every dispatch and upload at debug; headless runs
    /// only load and print, so info is enough.
    fn default_level(self) -> Level {
        match self {
            RunMode::Editor => Level::DEBUG,
            RunMode::Headless => Level::INFO,
        }
    }
}

/// Filter used when `LSTUDIO_LOG` is unset: `level` for the lstudio crates,
/// warnings from everything else.
fn default_filter(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    let mut directives: Vec<String> = LSTUDIO_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    directives.push("warn".to_string());
    directives.join(",")
}

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/layout-studio/logs/`, never to the
/// terminal the editor draws on. Log level is controlled by the `LSTUDIO_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// LSTUDIO_LOG=debug lstudio ./site
/// LSTUDIO_LOG=lstudio_core=trace lstudio ./site
/// ```
pub fn init(mode: RunMode) -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, mode.file_prefix());

    let env_filter = EnvFilter::try_from_env("LSTUDIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter(mode.default_level())));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        "Layout Studio {} starting ({:?})",
        env!("CARGO_PKG_VERSION"),
        mode
    );
    tracing::info!("Log file: {}", log_file(mode).display());

    Ok(())
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("layout-studio").join("logs")
}

/// Base path of a mode's log file; the appender adds the date suffix.
pub fn log_file(mode: RunMode) -> PathBuf {
    log_directory().join(mode.file_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_files_live_in_app_directory() {
        assert!(log_file(RunMode::Editor).ends_with("layout-studio/logs/lstudio.log"));
        assert!(log_file(RunMode::Headless).ends_with("layout-studio/logs/lstudio-headless.log"));
    }

    #[test]
    fn test_default_filter_quiets_other_crates() {
        let filter = default_filter(Level::DEBUG);
        assert!(filter.starts_with("layout_studio=debug,lstudio_app=debug"));
        assert!(filter.ends_with(",warn"));
        assert!(EnvFilter::try_new(&filter).is_ok());
    }

    #[test]
    fn test_editor_logs_more_than_headless() {
        assert!(RunMode::Editor.default_level() > RunMode::Headless.default_level());
    }
}
