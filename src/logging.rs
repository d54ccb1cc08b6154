use anyhow::{anyhow, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize logging on stderr; stdout is reserved for the results.
pub fn init(level: LevelFilter) -> Result<()> {
    let mut config_builder = ConfigBuilder::new();
    config_builder
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .set_time_level(LevelFilter::Off);
    TermLogger::init(
        level,
        config_builder.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
