//! Data types for state writes and the change history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of retained change-history entries.
///
/// The history is a diagnostics aid, not an undo buffer; once the cap is
/// exceeded the oldest entries are evicted first.
pub const MAX_HISTORY_SIZE: usize = 50;

/// Fallback attribution for writes that don't name a source.
pub(crate) const UNKNOWN_SOURCE: &str = "unknown";

/// Options controlling a single state write.
///
/// The default is a plain replace that logs and notifies subscribers.
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Skip the diagnostic log line and subscriber dispatch. The value is
    /// still written and the history entry still recorded.
    pub silent: bool,
    /// Shallow-merge the new value into the existing one when both are
    /// objects. Arrays and primitives are always fully replaced.
    pub merge: bool,
    /// Which part of the application made this write, for history and logs.
    pub source: Option<String>,
}

impl SetOptions {
    /// Options for an attributed, otherwise-default write.
    pub fn with_source(source: impl Into<String>) -> Self {
        SetOptions {
            source: Some(source.into()),
            ..SetOptions::default()
        }
    }
}

/// One recorded state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The path that was written.
    pub path: String,
    /// Value previously stored at the path, `None` if it was unset.
    pub old_value: Option<Value>,
    /// Value written (post-merge, when merging applied).
    pub new_value: Value,
    /// Attribution from [`SetOptions::source`], `"unknown"` when absent.
    pub source: String,
    /// When the write happened.
    pub timestamp: DateTime<Utc>,
}
