use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// `HH:MM:SS.mmm`, 24-hour, zero padded.
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";
/// Character width of a time rendered with [`TIME_FORMAT`].
pub const TIME_FORMAT_WIDTH: usize = "HH:MM:SS.mmm".len();

/// Fixed-precision decimal text for legend rows.
///
/// Every finite input, including `f64::MAX`/`f64::MIN`, is written out in
/// full. NaN renders as `NaN` and the infinities as `Inf`/`-Inf`.
#[must_use]
pub fn format_value(value: f64, precision: u8) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Inf".to_owned()
        } else {
            "Inf".to_owned()
        };
    }
    let precision = usize::from(precision);
    format!("{value:.precision$}")
}

/// Wall-clock text of `time` in its own offset.
#[must_use]
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIME_FORMAT).to_string()
}
