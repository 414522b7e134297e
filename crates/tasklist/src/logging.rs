//! Console logging.
//!
//! In the browser the macros forward to Zoon's `println!` / `eprintln!`
//! (`console.log` / `console.error`). On the host they print to stdout and
//! stderr, so unit tests never call into wasm imports.

/// Verbose per-operation logging, controlled by the `debug-log` feature.
pub const DEBUG_LOG: bool = cfg!(feature = "debug-log");

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::zoon::println!($($arg)*);
        #[cfg(not(target_arch = "wasm32"))]
        ::std::println!($($arg)*);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::zoon::eprintln!($($arg)*);
        #[cfg(not(target_arch = "wasm32"))]
        ::std::eprintln!($($arg)*);
    }};
}

/// Only emitted in debug builds with the `debug-log` feature enabled.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if cfg!(debug_assertions) && $crate::logging::DEBUG_LOG {
            $crate::log_info!($($arg)*);
        }
    }};
}
