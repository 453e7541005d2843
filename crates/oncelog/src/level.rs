//! Severity levels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Record severity, ascending.
///
/// The three levels above [`Level::Error`] carry a side effect after the
/// record is written and flushed: see [`Logger`](crate::Logger).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Diagnostic detail, disabled by default.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected but handled.
    Warn,
    /// Operation failed.
    Error,
    /// Logs, then panics when the logger is in development mode.
    DPanic,
    /// Logs, then panics.
    Panic,
    /// Logs, then runs the fatal hook (process exit by default).
    Fatal,
}

impl Level {
    /// Lowercase name, as parsed and as written in the `severity` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::DPanic => "dpanic",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
        }
    }

    /// The `tracing` level events are emitted at. Everything from
    /// [`Level::Error`] up shares `ERROR`.
    #[must_use]
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error | Self::DPanic | Self::Panic | Self::Fatal => tracing::Level::ERROR,
        }
    }

    /// Whether the level has a side effect after logging.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::DPanic | Self::Panic | Self::Fatal)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "dpanic" => Ok(Self::DPanic),
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            _ => Err(LoggerError::UnknownLevel(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::DPanic);
        assert!(Level::DPanic < Level::Panic);
        assert!(Level::Panic < Level::Fatal);
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn level_display() {
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::DPanic.to_string(), "dpanic");
    }

    #[test]
    fn level_serde() {
        assert_eq!(serde_json::to_string(&Level::DPanic).unwrap(), "\"dpanic\"");
        let back: Level = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(back, Level::Fatal);
    }

    #[test]
    fn level_from_str() {
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Panic".parse::<Level>().unwrap(), Level::Panic);
        assert_matches!("loud".parse::<Level>(), Err(LoggerError::UnknownLevel(s)) if s == "loud");
    }

    #[test]
    fn terminal_levels_share_tracing_error() {
        assert_eq!(Level::Warn.as_tracing(), tracing::Level::WARN);
        for level in [Level::Error, Level::DPanic, Level::Panic, Level::Fatal] {
            assert_eq!(level.as_tracing(), tracing::Level::ERROR);
        }
        assert!(!Level::Error.is_terminal());
        assert!(Level::DPanic.is_terminal());
        assert!(Level::Fatal.is_terminal());
    }
}
