//! Internal logging macros.
//!
//! Forward to the `log` facade when the `logging` feature is enabled and
//! compile to nothing otherwise, while still type-checking the arguments.

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        ::log::debug!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)+) => {
        ::log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}

/// Run a block only when debug logging is enabled. Use it for diagnostics
/// that are too costly to compute and then throw away.
#[cfg(feature = "logging")]
macro_rules! debug_exec {
    ($block:block) => {
        if ::log::log_enabled!(::log::Level::Debug) {
            $block
        }
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_exec {
    ($block:block) => {
        if false {
            $block
        }
    };
}
