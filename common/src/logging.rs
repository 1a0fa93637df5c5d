use chrono::{DateTime, Datelike, Local, Timelike};
use log::Record;
use std::fmt::Arguments;

pub const DEFAULT_FORMAT: &str = "[$Y-$m-$D $H:$M $LEVEL] $MESSAGE";

pub fn parse_format(format: String, message: &Arguments, record: &Record) -> String {
    format_at(format, message, record, Local::now())
}

fn format_at(
    format: String, message: &Arguments, record: &Record, time: DateTime<Local>,
) -> String {
    let mut log = format.trim().to_string();

    // Time
    log = log.replacen("$Y", &format!("{:0>2}", time.year()), 1);
    log = log.replacen("$m", &format!("{:0>2}", time.month()), 1);
    log = log.replacen("$D", &format!("{:0>2}", time.day()), 1);
    log = log.replacen("$H", &format!("{:0>2}", time.hour()), 1);
    log = log.replacen("$M", &format!("{:0>2}", time.minute()), 1);
    log = log.replacen("$S", &format!("{:0>2}", time.second()), 1);

    // Level
    log = log.replacen("$LEVEL", record.level().as_str(), 1);

    // Target
    log = log.replacen("$TARGET", record.target(), 1);

    // Message
    log = log.replacen("$MESSAGE", &message.to_string(), 1);

    log
}

pub use error::LogError;

mod error;
