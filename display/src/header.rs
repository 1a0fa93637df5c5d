use crate::{INDENT, SEPARATOR_WIDTH};
use chrono::{DateTime, Local, Utc};
use dpi::frame::{DecodedFrame, MICROS_PER_SECOND, Timestamp};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const TIME_UNAVAILABLE: &str = "--:--:--";
pub const ALL_INTERFACES: &str = "all";

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeZone {
    #[default]
    Local,
    Utc,
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn lines(frame: &DecodedFrame, zone: TimeZone) -> Vec<String> {
    let interface = frame.interface.as_deref().unwrap_or(ALL_INTERFACES);

    vec![
        separator(),
        format!(
            "[>] Frame #{} at {}:",
            frame.number,
            time_of_day(&frame.timestamp, zone)
        ),
        format!("{INDENT}Interface: {}", interface),
        format!("{INDENT}Frame Length: {}", frame.length),
        format!("{INDENT}Epoch Time: {}", frame.timestamp.epoch_string()),
    ]
}

pub fn time_of_day(timestamp: &Timestamp, zone: TimeZone) -> String {
    let datetime = match to_datetime(timestamp) {
        Some(value) => value,
        None => return TIME_UNAVAILABLE.to_string(),
    };

    match zone {
        TimeZone::Local => datetime.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        TimeZone::Utc => datetime.format(TIME_FORMAT).to_string(),
    }
}

fn to_datetime(timestamp: &Timestamp) -> Option<DateTime<Utc>> {
    let total = timestamp.total_micros();
    let seconds = i64::try_from(total.div_euclid(MICROS_PER_SECOND)).ok()?;
    let nanoseconds = u32::try_from(total.rem_euclid(MICROS_PER_SECOND) * 1_000).ok()?;

    DateTime::from_timestamp(seconds, nanoseconds)
}
