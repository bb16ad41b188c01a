mod config;
mod error;
mod format;

pub use config::{LogConfig, LogTarget};
pub use error::InitError;
pub use format::{LineFormat, DEFAULT_DATE_FORMAT};

pub use env_logger::Logger;
pub use log;

/// Builds the logger described by `conf` without installing it.
pub fn build(conf: &LogConfig) -> Result<Logger, InitError> {
    let format = LineFormat::new(&conf.date_format)?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(conf.level)
        .target(conf.target.into())
        .format(move |buf, record| format.write(buf, record));
    if let Some(filters) = &conf.filters {
        builder.parse_filters(filters);
    }

    Ok(builder.build())
}

/// Installs the logger described by `conf` as the process logger.
///
/// Must be called once, at process entry. Later calls leave the installed
/// logger untouched and return [`InitError::AlreadyInitialized`].
pub fn init(conf: &LogConfig) -> Result<(), InitError> {
    let logger = build(conf)?;
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
