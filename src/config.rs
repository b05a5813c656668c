//! Logging configuration.
//!
//! Settings come from the environment (after `.env` is loaded by `main`):
//! - `IPCALC_LOG_CONFIG` - log4rs YAML file, default `log4rs.yml`
//! - `IPCALC_LOG_LEVEL` - level used when that file is missing, default `warn`
//!
//! All log output goes to stderr; stdout carries only the report.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const LOG_CONFIG_ENV: &str = "IPCALC_LOG_CONFIG";
pub const LOG_LEVEL_ENV: &str = "IPCALC_LOG_LEVEL";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub config_file: PathBuf,
    pub level: LevelFilter,
}

impl LogSettings {
    pub fn from_env() -> LogSettings {
        LogSettings::from_vars(
            std::env::var(LOG_CONFIG_ENV).ok(),
            std::env::var(LOG_LEVEL_ENV).ok(),
        )
    }

    fn from_vars(config_file: Option<String>, level: Option<String>) -> LogSettings {
        let config_file = config_file
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());
        // Unknown level names fall back to the default.
        let level = level
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        LogSettings {
            config_file: PathBuf::from(config_file),
            level,
        }
    }
}

impl Default for LogSettings {
    fn default() -> LogSettings {
        LogSettings::from_vars(None, None)
    }
}

/// Build the stderr-only config used when no YAML file is present.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger, from the YAML file if it exists.
pub fn init_logging(settings: &LogSettings) -> Result<(), Box<dyn Error>> {
    if settings.config_file.exists() {
        log4rs::init_file(&settings.config_file, Default::default())?;
        log::debug!("Logging from {}", settings.config_file.display());
    } else {
        log4rs::init_config(stderr_config(settings.level)?)?;
        log::debug!(
            "No {}, logging to stderr at {}",
            settings.config_file.display(),
            settings.level
        );
    }
    Ok(())
}
