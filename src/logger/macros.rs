//! Logging macros. Same routing as the methods, but the enclosing function
//! is named at compile time instead of looked up from the stack, so it
//! survives stripped builds.
//!
//! ```
//! use gumo_logging::{info, LoggerManager};
//!
//! let manager = LoggerManager::new();
//! let logger = manager.get_logger(Some("abc/1;o=1"));
//! info!(logger, "user {} signed in", 42);
//! ```

/// Logs at an explicit level: `log!(logger, Level::Info, "x = {}", x)` or `log!(logger, level, message)`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log_at(
            $level,
            ::std::format!($fmt $(, $arg)*),
            ::std::option::Option::Some($crate::__source_location!()),
        )
    };
    ($logger:expr, $level:expr, $msg:expr $(,)?) => {
        $logger.log_at(
            $level,
            $msg,
            ::std::option::Option::Some($crate::__source_location!()),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __source_location {
    () => {
        $crate::record::SourceLocation::call_site().with_function($crate::function_name!())
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::FATAL, $($arg)+)
    };
}
