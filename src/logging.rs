//! Trace logging, compiled in with the `logging` feature

/// Forward to `log::trace!` when logging is enabled
#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

/// Type-check the arguments but emit nothing when logging is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::std::format!($($arg)*);
        }
    };
}
