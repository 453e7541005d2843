//! Call-site macros for the process-wide logger.
//!
//! The `*w!` macros take a message followed by alternating keys and values
//! of any `Serialize` type; the `*f!` macros take `format!` arguments.
//!
//! ```ignore
//! oncelog::infow!("started", "port", 8080, "tls", false);
//! oncelog::fatalf!("cannot bind {}", addr);
//! ```

/// Log at `debug` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! debugw {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::debugw($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log at `info` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! infow {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::infow($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log at `warn` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! warnw {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::warnw($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log at `error` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! errorw {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::errorw($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log at `dpanic` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! dpanicw {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::dpanicw($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log at `panic` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! panicw {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::panicw($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log at `fatal` on the process-wide logger with alternating keys and values.
#[macro_export]
macro_rules! fatalw {
    ($msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::fatalw($msg, &[$($crate::value(&$kv)),*])
    };
}

/// Log a formatted message at `debug` on the process-wide logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `info` on the process-wide logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `warn` on the process-wide logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `error` on the process-wide logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `dpanic` on the process-wide logger.
#[macro_export]
macro_rules! dpanicf {
    ($($arg:tt)+) => {
        $crate::dpanicf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `panic` on the process-wide logger.
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panicf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `fatal` on the process-wide logger.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}
