//! The process-wide logger.
//!
//! One [`Logger`] per process, built by whichever of [`configure`],
//! [`try_configure`], [`logger`], or a logging function runs first.
//! Concurrent callers block until that first build finishes and then share
//! the instance. Options passed after that are ignored; [`configure`] says
//! so with a warning record.

use std::fmt;

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::error::LoggerError;
use crate::logger::Logger;
use crate::options::{Config, LogOption};

static LOGGER: OnceCell<Logger> = OnceCell::new();

/// Build the process-wide logger from `options`.
///
/// Panics if the logger cannot be built. Once built, later calls leave it
/// unchanged and write a `warn` record when they carry options.
#[track_caller]
pub fn configure<I>(options: I)
where
    I: IntoIterator<Item = LogOption>,
{
    let options: Vec<LogOption> = options.into_iter().collect();
    let supplied = options.len();
    let mut built = false;

    let logger = abort_on_error(LOGGER.get_or_try_init(|| {
        built = true;
        Logger::new(Config::from_options(options))
    }));

    if !built && supplied > 0 {
        logger.warnw(
            "logger already configured; options ignored",
            &[Value::from("ignored_options"), Value::from(supplied)],
        );
    }
}

/// Build the process-wide logger from `options`, or return the existing one.
pub fn try_configure<I>(options: I) -> Result<&'static Logger, LoggerError>
where
    I: IntoIterator<Item = LogOption>,
{
    LOGGER.get_or_try_init(|| Logger::new(Config::from_options(options)))
}

/// The process-wide logger, built from `options` if this is the first use.
///
/// Panics if the logger cannot be built.
#[track_caller]
pub fn logger<I>(options: I) -> &'static Logger
where
    I: IntoIterator<Item = LogOption>,
{
    abort_on_error(try_configure(options))
}

/// The process-wide logger, built with defaults if nothing configured it.
#[track_caller]
pub fn global() -> &'static Logger {
    logger(Vec::<LogOption>::new())
}

/// Whether the process-wide logger has been built.
pub fn is_configured() -> bool {
    LOGGER.get().is_some()
}

#[track_caller]
fn abort_on_error(result: Result<&'static Logger, LoggerError>) -> &'static Logger {
    match result {
        Ok(logger) => logger,
        Err(e) => panic!("oncelog: failed to build logger: {e}"),
    }
}

macro_rules! global_functions {
    ($($w:ident, $f:ident;)*) => {$(
        #[doc = concat!("[`Logger::", stringify!($w), "`] on the process-wide logger.")]
        #[track_caller]
        pub fn $w(msg: &str, keys_and_values: &[Value]) {
            global().$w(msg, keys_and_values);
        }

        #[doc = concat!("[`Logger::", stringify!($f), "`] on the process-wide logger.")]
        #[track_caller]
        pub fn $f(args: fmt::Arguments<'_>) {
            global().$f(args);
        }
    )*};
}

global_functions! {
    debugw, debugf;
    infow, infof;
    warnw, warnf;
    errorw, errorf;
    dpanicw, dpanicf;
    panicw, panicf;
    fatalw, fatalf;
}
