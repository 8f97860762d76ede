//! Facade logging macros.
//!
//! The navigator's own diagnostic output (scheduler activity, queue drains,
//! reconciliation details) goes through these macros, which dispatch to the
//! [`log`](https://docs.rs/log) or [`tracing`](https://docs.rs/tracing)
//! crate depending on the enabled feature. Enable at most one of them.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! These macros are separate from the leveled [`Logger`](crate::Logger)
//! port: the port is part of the navigator's public contract, the facade is
//! plumbing. [`FacadeDelegate`](crate::FacadeDelegate) bridges the two.
//!
//! ```ignore
//! use stack_navigator::{debug_log, trace_log};
//!
//! trace_log!("settle timer armed for {:?}", delay);
//! debug_log!("queued command #{}", depth);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __facade_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    };
}

/// Emit a **trace**-level message through the logging facade.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__facade_log!(trace, $($arg)*) };
}

/// Emit a **debug**-level message through the logging facade.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__facade_log!(debug, $($arg)*) };
}

/// Emit an **info**-level message through the logging facade.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__facade_log!(info, $($arg)*) };
}

/// Emit a **warn**-level message through the logging facade.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__facade_log!(warn, $($arg)*) };
}
