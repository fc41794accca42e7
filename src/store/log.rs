use super::JsonStore;
use crate::errors::AppResult;
use crate::models::LogEntry;
use chrono::Local;

impl JsonStore {
    /// Append an internal log line and persist it.
    pub fn append_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.commit(|doc| {
            doc.log.push(LogEntry {
                id: doc.next_log_id(),
                date: Local::now().to_rfc3339(),
                operation: operation.to_string(),
                target: target.to_string(),
                message: message.to_string(),
            });
            Ok(())
        })
    }
}

/// Write an activity log line; failures are reported but never abort the caller.
pub fn hrlog(store: &mut JsonStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.append_log(operation, target, message) {
        tracing::warn!(error = %e, operation, "failed to write internal log");
    }
}
