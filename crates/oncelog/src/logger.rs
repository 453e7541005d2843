//! The logger: one engine instance plus the leveled call surface.
//!
//! Every call writes (when the level is enabled), flushes, and only then
//! runs the level's side effect. A record is therefore on its destination
//! before a panic unwinds or the process exits.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::Dispatch;

use crate::encoding::Encoding;
use crate::error::LoggerError;
use crate::level::Level;
use crate::{callsite, engine, fields};
use crate::options::Config;
use crate::sink::Sink;
use crate::time::TimeEncoder;

/// Action run after a fatal record has been written and flushed.
#[derive(Clone)]
pub enum FatalHook {
    /// Terminate the process with this status code.
    Exit(i32),
    /// Panic with the record's message.
    Panic,
    /// Call back with the record's message. If the callback returns, so
    /// does the logging call.
    Custom(Arc<dyn Fn(&str) + Send + Sync>),
}

impl FatalHook {
    /// Wrap a callback.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    fn run(&self, message: &str) {
        match self {
            Self::Exit(code) => std::process::exit(*code),
            Self::Panic => panic!("{message}"),
            Self::Custom(f) => f(message),
        }
    }
}

impl Default for FatalHook {
    fn default() -> Self {
        Self::Exit(1)
    }
}

impl fmt::Debug for FatalHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit(code) => f.debug_tuple("Exit").field(code).finish(),
            Self::Panic => f.write_str("Panic"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

macro_rules! level_methods {
    ($($level:ident => $w:ident, $f:ident;)*) => {$(
        #[doc = concat!("Log at `", stringify!($level), "` with alternating keys and values.")]
        #[track_caller]
        pub fn $w(&self, msg: &str, keys_and_values: &[Value]) {
            self.logw(Level::$level, msg, keys_and_values);
        }

        #[doc = concat!("Log a formatted message at `", stringify!($level), "`.")]
        #[track_caller]
        pub fn $f(&self, args: fmt::Arguments<'_>) {
            self.logf(Level::$level, args);
        }
    )*};
}

/// A configured logging engine.
///
/// Usually reached through the process-wide facade
/// ([`logger`](crate::logger), [`infow`](crate::infow), …), but can be
/// built and passed around directly.
pub struct Logger {
    dispatch: Dispatch,
    sink: Arc<Sink>,
    encoding: Encoding,
    time_encoder: TimeEncoder,
    level: Level,
    development: bool,
    fatal_hook: FatalHook,
}

impl Logger {
    /// Build an engine writing to `config.outputs`.
    pub fn new(config: Config) -> Result<Self, LoggerError> {
        let encoding = validate(&config)?;
        let sink = Sink::open(&config.outputs)?;
        Ok(Self::assemble(config, encoding, sink))
    }

    /// Build an engine writing to `sink`; `config.outputs` is ignored.
    pub fn with_sink(config: Config, sink: Sink) -> Result<Self, LoggerError> {
        let encoding = validate(&config)?;
        Ok(Self::assemble(config, encoding, sink))
    }

    fn assemble(config: Config, encoding: Encoding, sink: Sink) -> Self {
        let sink = Arc::new(sink);
        let dispatch = engine::build(
            encoding,
            &config.time_encoder,
            config.level,
            Arc::clone(&sink),
        );

        Self {
            dispatch,
            sink,
            encoding,
            time_encoder: config.time_encoder,
            level: config.level,
            development: config.development,
            fatal_hook: config.fatal_hook,
        }
    }

    /// Minimum level written.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Record encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Timestamp rendering.
    pub fn time_encoder(&self) -> &TimeEncoder {
        &self.time_encoder
    }

    /// Whether dpanic panics.
    pub fn is_development(&self) -> bool {
        self.development
    }

    /// Whether records at `level` are written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// The `tracing` dispatch backing this logger.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Route plain `tracing` events from the whole process through this
    /// logger's outputs. Can succeed once per process.
    pub fn set_global_default(&self) -> Result<(), LoggerError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())?;
        Ok(())
    }

    /// Flush every output.
    pub fn sync(&self) -> io::Result<()> {
        self.sink.sync()
    }

    /// Log `msg` at `level` with alternating keys and values.
    #[track_caller]
    pub fn logw(&self, level: Level, msg: &str, keys_and_values: &[Value]) {
        let caller = Location::caller();
        if self.enabled(level) {
            let fields = fields::sweeten(keys_and_values);
            callsite::emit(&self.dispatch, level, caller, msg, &fields);
        }
        self.finish(level, msg);
    }

    /// Log a formatted message at `level`.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        let message = fmt::format(args);
        if self.enabled(level) {
            callsite::emit(&self.dispatch, level, caller, &message, &Map::new());
        }
        self.finish(level, &message);
    }

    level_methods! {
        Debug => debugw, debugf;
        Info => infow, infof;
        Warn => warnw, warnf;
        Error => errorw, errorf;
        DPanic => dpanicw, dpanicf;
        Panic => panicw, panicf;
        Fatal => fatalw, fatalf;
    }

    fn finish(&self, level: Level, message: &str) {
        // Flush errors are not actionable by the caller.
        let _ = self.sync();
        match level {
            Level::DPanic if self.development => panic!("{message}"),
            Level::Panic => panic!("{message}"),
            Level::Fatal => self.fatal_hook.run(message),
            _ => {}
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("encoding", &self.encoding)
            .field("time_encoder", &self.time_encoder)
            .field("level", &self.level)
            .field("development", &self.development)
            .field("outputs", &self.sink.len())
            .field("fatal_hook", &self.fatal_hook)
            .finish_non_exhaustive()
    }
}

fn validate(config: &Config) -> Result<Encoding, LoggerError> {
    let encoding = config.encoding.parse()?;
    config.time_encoder.validate()?;
    Ok(encoding)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
