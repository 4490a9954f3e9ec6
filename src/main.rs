extern crate chrono;
extern crate config as conf;
extern crate failure;
extern crate fern;
#[macro_use]
extern crate log;

use std::env;

use chrono::Local;
use colored::Color;
use fern::colors::ColoredLevelConfig;
use log::LevelFilter;

use crate::config::config_file;
use crate::config::destinations::load_destinations;
use crate::config::diagnostics::Logger;
use crate::config::global::load_global_config;

mod config;

const DEFAULT_CONFIG: &str = "config/bridge";

// Kept outside the config prefix so it isn't merged into the configuration.
const LOG_LEVEL_VAR: &str = "BRIDGE_LOG_LEVEL";

fn main() -> Result<(), failure::Error> {
    set_up_logger()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_CONFIG));

    info!("Reading config from \"{}\"", path);

    let source = config_file::read(&path)?;
    let destinations = load_destinations(&source, &Logger)?;
    let global = load_global_config(&source, &Logger)?;

    for destination in &destinations {
        info!(
            "Destination \"{}\" subscribes to: {}",
            destination.host,
            destination.topics.join(", ")
        );
    }

    info!(
        "Interval {:?}, publish timeout {:?}, disconnect timeout {:?}",
        global.interval_duration(),
        global.publish_timeout_duration(),
        global.disconnect_timeout_duration(),
    );

    Ok(())
}

fn set_up_logger() -> Result<(), failure::Error> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::BrightBlue)
        .trace(Color::Magenta);

    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                message
            ))
        })
        .level(LevelFilter::Off)
        .level_for("mqtt_bridge", level)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
