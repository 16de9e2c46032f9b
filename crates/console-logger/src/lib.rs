//! Console Logger
//!
//! A `log` backend for browser frontends. Records go to the browser console
//! on wasm32 (stderr elsewhere), one timestamped line per record.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            record.level(),
            &self.app_name,
            record.target(),
            &record.args().to_string(),
        );

        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Format one log line: `HH:MM:SS.mmm LEVEL [app] target: message`
pub fn format_line(timestamp: &str, level: Level, app_name: &str, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}: {}", timestamp, level, app_name, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger as the global `log` backend
///
/// Fails if another logger was installed first.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger {
        app_name: app_name.to_string(),
        level,
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
