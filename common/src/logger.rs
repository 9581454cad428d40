use chrono::Local;
use std::sync::OnceLock;

static INITIALIZED: OnceLock<()> = OnceLock::new();

pub fn init_logger() {
    INITIALIZED.get_or_init(|| ());
}

pub fn log(message: &str) {
    if INITIALIZED.get().is_some() {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}] {}", timestamp, message);
    }
}

pub fn warn(message: &str) {
    if INITIALIZED.get().is_some() {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!("[{}] WARN {}", timestamp, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::warn(&format!($($arg)*))
    };
}
