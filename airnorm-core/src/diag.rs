//! Optional logging shims
//!
//! Diagnostics in this crate are advisory: a clamped reading or an
//! over-range concentration is reported, never propagated as an error.
//! With the `log` feature the shims forward to the `log` crate; without
//! it they compile to nothing, keeping no_std builds silent and free.

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}
