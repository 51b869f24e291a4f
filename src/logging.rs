//! Logging setup.
//!
//! The library only emits records through the `log` facade.  Programs that
//! want to see them call [`configure_logging`] once at startup.

use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use once_cell::sync::OnceCell;

/// Environment variable with an `env_logger` filter, like `debug` or
/// `svgbuild=trace`.
pub const LOG_ENV: &str = "SVGBUILD_LOG";

/// Debug-level message under the `svgbuild` target.
macro_rules! svg_log {
    (
        $($arg:tt)+
    ) => {
        ::log::debug!(target: "svgbuild", $($arg)+)
    };
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Overrides both the default level and `SVGBUILD_LOG`.
    pub level: Option<LevelFilter>,

    /// Write to this file instead of stderr.  Missing parent directories
    /// are created.
    pub file: Option<PathBuf>,
}

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Installs the logger.
///
/// Only the first call installs anything; later calls just apply
/// `config.level`.
pub fn configure_logging(config: &LogConfig) -> io::Result<()> {
    let mut installed_now = false;

    INSTALLED.get_or_try_init(|| {
        installed_now = true;
        install(config)
    })?;

    if !installed_now {
        if let Some(level) = config.level {
            set_global_logging_level(level);
        }
    }

    Ok(())
}

fn install(config: &LogConfig) -> io::Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);

    if let Ok(filters) = env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }

    if let Some(level) = config.level {
        builder.filter_level(level);
    }

    if let Some(ref path) = config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }

    // Someone else's logger is already in place; leave it alone.
    if builder.try_init().is_err() {
        if let Some(level) = config.level {
            set_global_logging_level(level);
        }
    }

    svg_log!("logging configured: {:?}", config);

    Ok(())
}

/// Changes the maximum level of records that get through.
pub fn set_global_logging_level(level: LevelFilter) {
    log::set_max_level(level);
}
