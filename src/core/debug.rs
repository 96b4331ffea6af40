//! Lightweight debug logging, on with `--debug` or FUEL_ALIGN_DEBUG=1.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static FROM_ENV: OnceLock<bool> = OnceLock::new();
static FROM_FLAG: AtomicBool = AtomicBool::new(false);

pub fn enable() {
    FROM_FLAG.store(true, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    FROM_FLAG.load(Ordering::Relaxed)
        || *FROM_ENV.get_or_init(|| std::env::var("FUEL_ALIGN_DEBUG").ok().as_deref() == Some("1"))
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() {
            use colored::Colorize;
            eprintln!("{} {}", "debug:".dimmed(), format!($($arg)*).dimmed());
        }
    }};
}
