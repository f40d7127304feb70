//! File-based logging using simplelog
//!
//! Log file location, unless `log_dir` is configured:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/redux-rps/ on Linux)

use anyhow::{Context, Result};
use rps_config::AppConfig;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("rps-{}.log", timestamp)
}

/// Get the log file path based on config and build type
fn log_file_path(config: &AppConfig) -> PathBuf {
    let filename = log_file_name();

    if let Some(dir) = &config.log_dir {
        return dir.join(filename);
    }

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        rps_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// `RUST_LOG` wins over the configured level
fn level(config: &AppConfig, rust_log: Option<&str>) -> LevelFilter {
    rust_log
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| config.level_filter())
}

/// Initialize file-based logging
///
/// Returns the path to the created log file.
pub fn init(config: &AppConfig) -> Result<PathBuf> {
    let log_file = log_file_path(config);
    let level = level(config, std::env::var("RUST_LOG").ok().as_deref());

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(level, log_config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_log_dir_is_used() {
        let config = AppConfig {
            log_dir: Some(PathBuf::from("/var/tmp/rps")),
            ..AppConfig::default()
        };

        let path = log_file_path(&config);
        assert_eq!(path.parent(), Some(std::path::Path::new("/var/tmp/rps")));

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("rps-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_rust_log_overrides_config() {
        let config = AppConfig::default();
        assert_eq!(level(&config, Some("trace")), LevelFilter::Trace);
        assert_eq!(level(&config, None), LevelFilter::Info);
        assert_eq!(level(&config, Some("nonsense")), LevelFilter::Info);
    }
}
