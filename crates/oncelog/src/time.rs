//! Timestamp rendering strategies.

use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{ChronoLocal, FormatTime};

use crate::error::LoggerError;

const RFC3339_NANO: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";
const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// How the timestamp of each record is rendered.
///
/// Calendar variants render in the local time zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEncoder {
    /// `2024-01-15T12:00:00.123456+01:00`, fraction only when non-zero.
    #[default]
    Rfc3339,
    /// `2024-01-15T12:00:00.123456789+01:00`
    Rfc3339Nano,
    /// `2024-01-15T12:00:00.123+0100`
    Iso8601,
    /// Seconds since the Unix epoch, with a nanosecond fraction.
    EpochSeconds,
    /// Milliseconds since the Unix epoch, with a nanosecond fraction.
    EpochMillis,
    /// Whole nanoseconds since the Unix epoch.
    EpochNanos,
    /// A `strftime` pattern as understood by `chrono`.
    Custom(String),
}

impl TimeEncoder {
    /// Reject custom patterns `chrono` cannot format.
    pub(crate) fn validate(&self) -> Result<(), LoggerError> {
        if let Self::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::InvalidTimeFormat(pattern.clone()));
            }
        }
        Ok(())
    }

    /// The formatter timer for this strategy.
    pub(crate) fn timer(&self) -> Timer {
        match self {
            Self::Rfc3339 => Timer::Calendar(ChronoLocal::rfc_3339()),
            Self::Rfc3339Nano => Timer::Calendar(ChronoLocal::new(RFC3339_NANO.to_string())),
            Self::Iso8601 => Timer::Calendar(ChronoLocal::new(ISO8601.to_string())),
            Self::EpochSeconds => Timer::Epoch(EpochUnit::Seconds),
            Self::EpochMillis => Timer::Epoch(EpochUnit::Millis),
            Self::EpochNanos => Timer::Epoch(EpochUnit::Nanos),
            Self::Custom(pattern) => Timer::Calendar(ChronoLocal::new(pattern.clone())),
        }
    }
}

impl FromStr for TimeEncoder {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rfc3339" => Ok(Self::Rfc3339),
            "rfc3339nano" => Ok(Self::Rfc3339Nano),
            "iso8601" => Ok(Self::Iso8601),
            "epoch" => Ok(Self::EpochSeconds),
            "millis" => Ok(Self::EpochMillis),
            "nanos" => Ok(Self::EpochNanos),
            _ => Err(LoggerError::UnknownTimeEncoder(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum EpochUnit {
    Seconds,
    Millis,
    Nanos,
}

/// [`FormatTime`] for the `fmt` layer.
pub(crate) enum Timer {
    Calendar(ChronoLocal),
    Epoch(EpochUnit),
}

impl FormatTime for Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match self {
            Self::Calendar(timer) => timer.format_time(w),
            Self::Epoch(unit) => write_epoch(*unit, &Utc::now(), w),
        }
    }
}

fn write_epoch<Tz: TimeZone>(
    unit: EpochUnit,
    time: &DateTime<Tz>,
    w: &mut impl fmt::Write,
) -> fmt::Result {
    let nanos = time.timestamp_subsec_nanos();
    match unit {
        EpochUnit::Seconds => write!(w, "{}.{nanos:09}", time.timestamp()),
        EpochUnit::Millis => write!(w, "{}.{:06}", time.timestamp_millis(), nanos % 1_000_000),
        EpochUnit::Nanos => match time.timestamp_nanos_opt() {
            Some(total) => write!(w, "{total}"),
            // Out of range for an i64 count of nanoseconds.
            None => Err(fmt::Error),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::FixedOffset;

    use super::*;

    fn fixed() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-15T12:30:45.123456789+01:00").unwrap()
    }

    fn now(encoder: &TimeEncoder) -> String {
        let mut out = String::new();
        encoder.timer().format_time(&mut Writer::new(&mut out)).unwrap();
        out
    }

    fn epoch(unit: EpochUnit) -> String {
        let mut out = String::new();
        write_epoch(unit, &fixed(), &mut out).unwrap();
        out
    }

    #[test]
    fn rfc3339_parses_back() {
        let ts = now(&TimeEncoder::Rfc3339);
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok(), "{ts}");
    }

    #[test]
    fn rfc3339_nano_has_nine_fraction_digits() {
        let ts = now(&TimeEncoder::Rfc3339Nano);
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok(), "{ts}");
        let fraction = ts.split_once('.').unwrap().1;
        let digits = fraction.chars().take_while(char::is_ascii_digit).count();
        assert_eq!(digits, 9);
    }

    #[test]
    fn iso8601_millis() {
        let ts = now(&TimeEncoder::Iso8601);
        assert!(DateTime::parse_from_str(&ts, ISO8601).is_ok(), "{ts}");
    }

    #[test]
    fn epoch_units() {
        assert_eq!(epoch(EpochUnit::Seconds), "1705318245.123456789");
        assert_eq!(epoch(EpochUnit::Millis), "1705318245123.456789");
        assert_eq!(epoch(EpochUnit::Nanos), "1705318245123456789");
    }

    #[test]
    fn epoch_timer_renders_current_time() {
        let secs: f64 = now(&TimeEncoder::EpochSeconds).parse().unwrap();
        assert!(secs > 1_700_000_000.0);
        assert!(now(&TimeEncoder::EpochNanos).parse::<i64>().is_ok());
    }

    #[test]
    fn custom_pattern() {
        let enc = TimeEncoder::Custom("%Y/%m/%d".into());
        assert!(enc.validate().is_ok());
        let ts = now(&enc);
        assert_eq!(ts.len(), 10);
        assert_eq!(ts.matches('/').count(), 2);
    }

    #[test]
    fn invalid_custom_pattern_rejected() {
        let enc = TimeEncoder::Custom("%Q".into());
        assert_matches!(enc.validate(), Err(LoggerError::InvalidTimeFormat(p)) if p == "%Q");
    }

    #[test]
    fn parse_names() {
        assert_eq!("RFC3339".parse::<TimeEncoder>().unwrap(), TimeEncoder::Rfc3339);
        assert_eq!("rfc3339nano".parse::<TimeEncoder>().unwrap(), TimeEncoder::Rfc3339Nano);
        assert_eq!("epoch".parse::<TimeEncoder>().unwrap(), TimeEncoder::EpochSeconds);
        assert_eq!("nanos".parse::<TimeEncoder>().unwrap(), TimeEncoder::EpochNanos);
        assert_matches!(
            "sundial".parse::<TimeEncoder>(),
            Err(LoggerError::UnknownTimeEncoder(_))
        );
    }

    #[test]
    fn serde_shape() {
        assert_eq!(
            serde_json::to_string(&TimeEncoder::Rfc3339Nano).unwrap(),
            "\"rfc3339_nano\""
        );
        let custom: TimeEncoder = serde_json::from_str(r#"{"custom":"%H"}"#).unwrap();
        assert_eq!(custom, TimeEncoder::Custom("%H".into()));
    }
}
