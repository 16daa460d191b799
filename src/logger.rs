use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

use crate::config::RELIEF_BOARD_CONFIG;

/// wires the `log` macros up to stdout. The level comes from the `[logging]` section of the config file;
/// rocket's own targets are capped at `warn`
pub fn setup_logger() {
    let configured = RELIEF_BOARD_CONFIG.logging.level.as_str();
    let level = LevelFilter::from_str(configured).unwrap_or_else(|_| {
        eprintln!("Unknown log level {configured}, defaulting to info");
        LevelFilter::Info
    });
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("rocket", LevelFilter::Warn)
        .level_for("_", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply();
    // only fails if a logger was already installed
    if let Err(e) = result {
        eprintln!("Failed to set up logging: {e}");
    }
}
