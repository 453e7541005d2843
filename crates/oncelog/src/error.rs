//! Construction errors.
//!
//! Logging calls never return errors. Everything in [`LoggerError`] is
//! detected while building the engine from a [`Config`](crate::Config).

use thiserror::Error;

/// Failure to build a [`Logger`](crate::Logger) from its configuration.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The encoding name is neither `"json"` nor `"console"`.
    #[error("unknown encoding {0:?} (expected \"json\" or \"console\")")]
    UnknownEncoding(String),

    /// A level name did not parse.
    #[error("unknown level {0:?}")]
    UnknownLevel(String),

    /// A time encoder name did not parse.
    #[error("unknown time encoder {0:?}")]
    UnknownTimeEncoder(String),

    /// A custom time pattern contains an unsupported specifier.
    #[error("invalid time format {0:?}")]
    InvalidTimeFormat(String),

    /// An output identifier is malformed.
    #[error("invalid output {output:?}: {reason}")]
    InvalidOutput {
        /// The identifier as configured.
        output: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An output file could not be opened for appending.
    #[error("failed to open output {path:?}")]
    OpenOutput {
        /// Filesystem path of the output.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Another `tracing` dispatcher is already the global default.
    #[error("global tracing dispatcher already set")]
    GlobalDefault(#[from] tracing::dispatcher::SetGlobalDefaultError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn unknown_encoding_message() {
        let err = LoggerError::UnknownEncoding("yaml".into());
        assert_eq!(
            err.to_string(),
            "unknown encoding \"yaml\" (expected \"json\" or \"console\")"
        );
    }

    #[test]
    fn invalid_output_message() {
        let err = LoggerError::InvalidOutput {
            output: "http://example.com".into(),
            reason: "unsupported scheme",
        };
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn open_output_keeps_source() {
        let err = LoggerError::OpenOutput {
            path: "/nope/app.log".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/nope/app.log"));
    }
}
