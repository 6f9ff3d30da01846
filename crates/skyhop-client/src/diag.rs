/// Console logging for the browser build. `console_warn!` covers degraded
/// rendering (a sprite that failed to load), `console_error!` covers fatal
/// startup problems. Both compile to no-ops in native/test builds.

#[cfg(target_family = "wasm")]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

#[cfg(target_family = "wasm")]
macro_rules! console_error {
    ($($arg:tt)*) => {
        web_sys::console::error_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! console_error {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

pub(crate) use {console_error, console_warn};
