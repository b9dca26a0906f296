//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a fixed-size circular
//! buffer and echoes each line to the browser console (stderr off wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Circular buffer of formatted log lines
pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            capacity: capacity.max(1),
            level,
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, level: Level, target: &str, message: &str) {
        let line = format!(
            "[{} {} {}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            level,
            target,
            message
        );
        emit(level, &self.app_name, &line);

        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.push(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, app_name: &str, line: &str) {
    let text = wasm_bindgen::JsValue::from_str(&format!("{} {}", app_name, line));
    match level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        _ => web_sys::console::log_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, app_name: &str, line: &str) {
    eprintln!("{} {}", app_name, line);
}

/// Install the global logger
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    LOGGER
        .set(RollingLogger::new(app_name, capacity, level))
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines held by the global logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_capacity_lines() {
        let logger = RollingLogger::new("Test", 2, LevelFilter::Debug);
        record(&logger, Level::Info, "one");
        record(&logger, Level::Info, "two");
        record(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] two"));
        assert!(lines[1].ends_with("] three"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new("Test", 8, LevelFilter::Warn);
        record(&logger, Level::Debug, "quiet");
        record(&logger, Level::Error, "loud");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR test"));
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let logger = RollingLogger::new("Test", 0, LevelFilter::Info);
        record(&logger, Level::Info, "a");
        record(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_global_logger_backs_log_macros() {
        // First caller wins; a second init must fail cleanly
        let _ = init_logger("Test", 4);
        assert_eq!(init_logger("Again", 4), Err(LoggerError::AlreadyInitialized));
        log::warn!(target: "app", "hello");
        assert!(recent().iter().any(|line| line.ends_with("WARN app] hello")));
    }
}
