//! Configuration record and functional options.
//!
//! A [`Config`] starts from defaults (JSON to stdout, RFC 3339 timestamps,
//! `info` and above) and is mutated by a sequence of [`LogOption`]s. Each
//! option assigns exactly one field, so the last option for a field wins.
//! Nothing is validated here; bad values surface when the logger is built.

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::logger::FatalHook;
use crate::time::TimeEncoder;

/// Everything needed to build a [`Logger`](crate::Logger).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destinations, in write order: `"stdout"`, `"stderr"`, a path, or a
    /// `file://` URL.
    pub outputs: Vec<String>,
    /// `"json"` or `"console"`.
    pub encoding: String,
    /// How timestamps are rendered.
    pub time_encoder: TimeEncoder,
    /// Records below this level are not written.
    pub level: Level,
    /// When set, [`Level::DPanic`] panics after logging.
    pub development: bool,
    /// Action taken after a fatal record has been written and flushed.
    #[serde(skip)]
    pub fatal_hook: FatalHook,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            outputs: vec!["stdout".to_string()],
            encoding: "json".to_string(),
            time_encoder: TimeEncoder::Rfc3339,
            level: Level::Info,
            development: false,
            fatal_hook: FatalHook::default(),
        }
    }
}

impl Config {
    /// Defaults with `options` applied in order.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LogOption>,
    {
        let mut config = Self::default();
        for option in options {
            config.apply(option);
        }
        config
    }

    /// Apply a single option.
    pub fn apply(&mut self, option: LogOption) {
        match option.0 {
            Setting::Output(outputs) => self.outputs = outputs,
            Setting::Encoding(encoding) => self.encoding = encoding,
            Setting::TimeEncoder(encoder) => self.time_encoder = encoder,
            Setting::Level(level) => self.level = level,
            Setting::Development(enabled) => self.development = enabled,
            Setting::FatalHook(hook) => self.fatal_hook = hook,
        }
    }
}

/// One deferred assignment to a [`Config`] field.
///
/// Build with [`with_output`], [`with_encoding`], [`with_time_encoder`],
/// [`with_level`], [`with_development`], or [`with_fatal_hook`].
#[derive(Clone, Debug)]
pub struct LogOption(Setting);

#[derive(Clone, Debug)]
enum Setting {
    Output(Vec<String>),
    Encoding(String),
    TimeEncoder(TimeEncoder),
    Level(Level),
    Development(bool),
    FatalHook(FatalHook),
}

/// Replace the destination list.
pub fn with_output<I, S>(destinations: I) -> LogOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    LogOption(Setting::Output(
        destinations.into_iter().map(Into::into).collect(),
    ))
}

/// Select the record encoding, `"json"` or `"console"`.
pub fn with_encoding(name: impl Into<String>) -> LogOption {
    LogOption(Setting::Encoding(name.into()))
}

/// Select how timestamps are rendered.
pub fn with_time_encoder(encoder: TimeEncoder) -> LogOption {
    LogOption(Setting::TimeEncoder(encoder))
}

/// Set the minimum level written.
pub fn with_level(level: Level) -> LogOption {
    LogOption(Setting::Level(level))
}

/// Make [`Level::DPanic`] panic after logging.
pub fn with_development(enabled: bool) -> LogOption {
    LogOption(Setting::Development(enabled))
}

/// Replace the action taken after a fatal record.
pub fn with_fatal_hook(hook: FatalHook) -> LogOption {
    LogOption(Setting::FatalHook(hook))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
