use std::{env, str::FromStr, time::SystemTime};

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use log::{Level, LevelFilter};

const LOG_LEVEL_ENV: &str = "RUST_LOG";

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

pub fn setup_logger() -> Result<()> {
    let level_filter = env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level().to_string().color(level_color(record.level())),
                record.target(),
                message
            ))
        })
        .level(level_filter)
        // reqwest/hyper are too chatty below warn
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
