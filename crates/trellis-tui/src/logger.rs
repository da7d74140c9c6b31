/// Logger that captures records into a memory ring buffer instead of stdout,
/// so logging never corrupts the terminal UI. The activity panel reads from it.
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

const MAX_LOG_LINES: usize = 5_000;

/// A log entry with timestamp and formatted message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "[{}] {:<5} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Thread-safe log buffer
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap();

        // Remove oldest log if we've hit the limit
        if logs.len() >= self.capacity {
            logs.pop_front();
        }

        logs.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.logs.read().unwrap().len()
    }

    pub fn get_recent_logs(&self, count: usize) -> Vec<String> {
        let logs = self.logs.read().unwrap();
        let start = logs.len().saturating_sub(count);
        logs.iter()
            .skip(start)
            .map(|entry| entry.format())
            .collect()
    }
}

/// Custom logger that writes to memory buffer
pub struct BufferedLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl BufferedLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        Self { buffer, level }
    }
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.add_log(LogEntry {
                timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
                level: record.level(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Initialize the buffered logger and return the buffer for reading logs
pub fn init_memory_logger(level: LevelFilter) -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferedLogger::new(buffer.clone(), level)))?;
    log::set_max_level(level);
    Ok(buffer)
}
