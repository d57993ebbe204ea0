//! Forwards `log` records to the browser console

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, msg: &str) -> String {
    format!("[{level} {target}] {msg}")
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
fn write_console(_level: Level, _line: &str) {}

/// Install the console logger. Later calls are ignored.
pub fn init(max_level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
