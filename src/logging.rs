/// Conditional logging for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in release builds by default. Errors and warnings go through
/// `leptos::logging::error!` and `leptos::logging::warn!` instead.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust,ignore
/// use crate::logging::log;
///
/// log!("Simulator started for route {}", route_id);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = ($(&$arg),+);
        }
    };
}

pub use log;
