//! # oncelog
//!
//! A process-wide structured logging facade, configured once.
//!
//! - **Options**: [`with_output`], [`with_encoding`], [`with_time_encoder`],
//!   [`with_level`], [`with_development`], [`with_fatal_hook`] mutate a
//!   [`Config`] record
//! - **Logger**: [`Logger`] owns one `tracing` dispatch whose
//!   `tracing_subscriber::fmt` layer renders records as JSON or console
//!   lines and writes them to the configured outputs
//! - **Facade**: [`configure`] / [`logger`] build the process-wide logger on
//!   first use; later options are ignored
//! - **Call surface**: per level, a key-value form (`infow`) and a template
//!   form (`infof`), as functions and as macros
//!
//! Every logging call flushes before it returns. `panic` (and `dpanic` in
//! development) panic after the flush; `fatal` runs the fatal hook, which
//! exits the process unless replaced.
//!
//! ```ignore
//! oncelog::configure([oncelog::with_output(["stdout"]), oncelog::with_encoding("console")]);
//! oncelog::infow!("started", "port", 8080);
//! oncelog::fatalf!("cannot bind {}", "0.0.0.0:80");
//! ```

mod callsite;
mod encoding;
mod engine;
mod error;
mod fields;
mod global;
mod level;
mod logger;
mod macros;
mod options;
mod sink;
mod time;

pub use callsite::{RENAMED_PREFIX, SEVERITY_FIELD};
pub use encoding::Encoding;
pub use error::LoggerError;
pub use fields::{IGNORED_FIELD, INVALID_FIELD, value};
pub use global::{
    configure, debugf, debugw, dpanicf, dpanicw, errorf, errorw, fatalf, fatalw, global, infof,
    infow, is_configured, logger, panicf, panicw, try_configure, warnf, warnw,
};
pub use level::Level;
pub use logger::{FatalHook, Logger};
pub use options::{
    Config, LogOption, with_development, with_encoding, with_fatal_hook, with_level, with_output,
    with_time_encoder,
};
pub use sink::Sink;
pub use time::TimeEncoder;

/// Field values for the key-value logging forms.
pub use serde_json::Value;
