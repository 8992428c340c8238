use acl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger. Defaults to warnings, `RUST_LOG` overrides the level.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
