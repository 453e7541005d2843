//! Record encodings.
//!
//! Both encodings produce exactly one line per record:
//!
//! - **json**: `{"timestamp":"…","level":"INFO","message":"started","port":8080,"filename":"src/main.rs","line_number":12}`
//! - **console**: `…  INFO src/main.rs:12: started port=8080`
//!
//! Structured fields keep the order they were supplied in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Serialization style of each record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Machine-readable, one JSON object per line.
    #[default]
    Json,
    /// Human-readable, one compact text line.
    Console,
}

impl Encoding {
    /// Name accepted by [`with_encoding`](crate::with_encoding).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Console => "console",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "console" => Ok(Self::Console),
            _ => Err(LoggerError::UnknownEncoding(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!("json".parse::<Encoding>().unwrap(), Encoding::Json);
        assert_eq!("console".parse::<Encoding>().unwrap(), Encoding::Console);
    }

    #[test]
    fn parse_unknown_name() {
        assert_matches!("xml".parse::<Encoding>(), Err(LoggerError::UnknownEncoding(n)) if n == "xml");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("JSON".parse::<Encoding>().is_err());
    }

    #[test]
    fn display_matches_serde() {
        assert_eq!(Encoding::Console.to_string(), "console");
        assert_eq!(serde_json::to_string(&Encoding::Json).unwrap(), "\"json\"");
    }
}
