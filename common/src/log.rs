//! Status macros shared by every crate.
//!
//! Thin wrappers over `tracing` so the cli formatter decides how a status
//! line looks. `success!` is routed to its own target so it can be told apart
//! from a plain `info!`.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "ipconv::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
