//! Console logging macros.
//!
//! Every line carries a coloured level tag and a UTC wall-clock stamp. Output goes to
//! `stderr` so that tabular results and CSV written to `stdout` stay clean.

/// Prints a single tagged line. Used by the level macros below.
#[macro_export]
macro_rules! log_line {
    ($tag:literal, $($arg:tt)*) => {
        eprintln!(concat!($tag, "[{}]\x1b[0m {}"), chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log_line!("\x1b[32m[INFO] ", $($arg)*)
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log_line!("\x1b[33m[LOG]  ", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log_line!("\x1b[35m[WARN] ", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log_line!("\x1b[31m[ERROR]", $($arg)*)
    };
}

/// Data source traffic (requests, live samples). Silent unless `LOG_COSMO_EVENTS` is set.
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var("LOG_COSMO_EVENTS").is_ok() {
            $crate::log_line!("\x1b[36m[EVENT]", $($arg)*)
        }
    };
}
