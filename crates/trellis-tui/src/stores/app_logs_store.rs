/// AppLogsStore exposes the captured application logs to the activity panel
use crate::logger::LogBuffer;

/// Number of lines kept in a snapshot; more than any terminal shows at once
const SNAPSHOT_LINES: usize = 200;

/// Snapshot of application logs
#[derive(Debug, Clone)]
pub struct AppLogsState {
    /// Formatted log lines, oldest first
    pub logs: Vec<String>,
}

/// Store that reads application logs from the shared buffer
#[derive(Clone)]
pub struct AppLogsStore {
    log_buffer: LogBuffer,
}

impl AppLogsStore {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self { log_buffer }
    }

    /// Get a read-only snapshot of the most recent logs
    pub fn get_state(&self) -> AppLogsState {
        AppLogsState {
            logs: self.log_buffer.get_recent_logs(SNAPSHOT_LINES),
        }
    }
}
