//! Console logging macros
//!
//! On wasm32 these go to the browser console through `web_sys::console`.
//! Native builds (tests, benches) have no console to talk to, so the
//! arguments are type-checked and dropped.
//!
//! Usage:
//! ```rust
//! use sandgarden_engine::console_log;
//!
//! let rows = 120;
//! console_log!("world created: {} rows", rows);
//! ```

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
