use chrono::{NaiveTime, Timelike};
use thiserror::Error;

const MINUTES_PER_DAY: i32 = 24 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("Expected a time of day in HH:MM format, got '{0}'")]
    InvalidFormat(String),

    #[error("Minute offset {0} is outside of a day")]
    OutOfRange(i32),
}

/// Converts a clock string like `"08:30"` into minutes since midnight.
/// Single digit hours are accepted, anything outside 00:00-23:59 is not.
pub fn parse_clock_string(value: &str) -> Result<i32, ClockError> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ClockError::InvalidFormat(value.to_string()))?;

    Ok((time.hour() * 60 + time.minute()) as i32)
}

/// Formats minutes since midnight as a zero padded `"HH:MM"` string.
pub fn format_minutes(minutes: i32) -> Result<String, ClockError> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(ClockError::OutOfRange(minutes));
    }

    let time = NaiveTime::from_num_seconds_from_midnight_opt(minutes as u32 * 60, 0)
        .ok_or(ClockError::OutOfRange(minutes))?;

    Ok(time.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_hours() {
        assert_eq!(parse_clock_string("08:00"), Ok(480));
        assert_eq!(parse_clock_string("8:00"), Ok(480));
        assert_eq!(parse_clock_string("12:30"), Ok(750));
        assert_eq!(parse_clock_string("00:00"), Ok(0));
        assert_eq!(parse_clock_string("23:59"), Ok(1439));
        assert_eq!(parse_clock_string(" 18:45 "), Ok(1125));
    }

    #[test]
    fn rejects_malformed_clock_strings() {
        for input in ["", "abc", "12", "12:", ":30", "ab:cd", "12:30:00", "24:00", "12:60", "-1:00"] {
            assert!(
                matches!(parse_clock_string(input), Err(ClockError::InvalidFormat(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn formats_minutes_zero_padded() {
        assert_eq!(format_minutes(0).unwrap(), "00:00");
        assert_eq!(format_minutes(480).unwrap(), "08:00");
        assert_eq!(format_minutes(750).unwrap(), "12:30");
        assert_eq!(format_minutes(1439).unwrap(), "23:59");
    }

    #[test]
    fn rejects_minutes_outside_of_day() {
        assert_eq!(format_minutes(-1), Err(ClockError::OutOfRange(-1)));
        assert_eq!(format_minutes(1440), Err(ClockError::OutOfRange(1440)));
    }

    #[test]
    fn every_minute_of_the_day_survives_formatting() {
        for minutes in 0..MINUTES_PER_DAY {
            let formatted = format_minutes(minutes).unwrap();
            assert_eq!(parse_clock_string(&formatted), Ok(minutes));
        }
    }

    #[test]
    fn every_padded_clock_string_survives_parsing() {
        for hour in 0..24 {
            for minute in 0..60 {
                let clock = format!("{:02}:{:02}", hour, minute);
                let minutes = parse_clock_string(&clock).unwrap();
                assert_eq!(format_minutes(minutes).unwrap(), clock);
            }
        }
    }
}
