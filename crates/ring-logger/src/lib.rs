//! Ring Logger
//!
//! A `log` backend that writes every record to the console and keeps the
//! most recent lines in a fixed-size circular buffer, so a page can show
//! what just happened without a log file.
//!
//! On `wasm32` the sink is the browser console (level-mapped); natively it
//! is stderr.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

// ============================================================================
// Buffer
// ============================================================================

/// Fixed-capacity line buffer; the oldest line is dropped first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// At most `n` lines, newest first
    pub fn latest(&self, n: usize) -> Vec<String> {
        self.lines.iter().rev().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ============================================================================
// Logger
// ============================================================================

pub struct RingLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl RingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// Install the global logger. Fails if any logger is already set.
    pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
        let logger = LOGGER.get_or_init(|| RingLogger::new(level, capacity));
        log::set_logger(logger)?;
        log::set_max_level(logger.level);
        Ok(())
    }

    /// Lines currently held, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines(),
            Err(poisoned) => poisoned.into_inner().lines(),
        }
    }

    /// At most `n` lines, newest first
    pub fn latest(&self, n: usize) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.latest(n),
            Err(poisoned) => poisoned.into_inner().latest(n),
        }
    }

    fn remember(&self, line: String) {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// `[12:04:05.120 INFO eastwood_ui::pages::fees] payment recorded`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{} {} {}] {}", timestamp, level, target, message)
}

/// Recent lines from the global logger; empty before [`RingLogger::init`]
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RingLogger::snapshot).unwrap_or_default()
}

/// The newest `n` lines from the global logger, newest first
pub fn latest(n: usize) -> Vec<String> {
    LOGGER.get().map(|logger| logger.latest(n)).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_latest_is_newest_first() {
        let mut buffer = RingBuffer::new(4);
        for i in 0..6 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.latest(2), vec!["line 5", "line 4"]);
        assert_eq!(buffer.latest(10).len(), 4);
    }

    // The only test that installs the global logger
    #[test]
    fn test_global_logger_keeps_recent_lines() {
        assert!(RingLogger::init(LevelFilter::Info, 3).is_ok());
        for i in 0..5 {
            log::info!(target: "fees", "payment {}", i);
        }
        log::debug!(target: "fees", "filtered");

        let lines = recent();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("INFO fees] payment 2"));
        let newest = latest(1);
        assert_eq!(newest.len(), 1);
        assert!(newest[0].ends_with("INFO fees] payment 4"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("ignored".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RingLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("fees")
                .args(format_args!("skipped"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("fees")
                .args(format_args!("kept"))
                .build(),
        );

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("WARN fees] kept"));
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("09:15:00.000", Level::Info, "grades", "saved"),
            "[09:15:00.000 INFO grades] saved"
        );
    }
}
