//! Logging shims.
//!
//! Every log line the crate emits goes through one of the macros below,
//! which forward to [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) depending on the enabled feature.
//! Enable at most one backend.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature the macros expand to nothing, so link rendering and
//! click handling carry no logging cost at all.
//!
//! ```ignore
//! use gpui_navlink::{debug_log, warn_log};
//!
//! debug_log!("NavLink '{}' activated, replace={}", to, replace);
//! warn_log!("Unknown match mode '{}', using includes", raw);
//! ```

/// Emit a **trace**-level message (cache hits, per-render matching).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message (dispatch decisions).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level message (completed navigations).
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level message (lossy fallbacks, missing router).
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level message (navigation refused by the router).
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
