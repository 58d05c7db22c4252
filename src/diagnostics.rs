//! Error introspection helpers for diagnostic output.
//!
//! Turns any `std::error::Error` into a flat, serializable description
//! (top-level message plus the `source()` chain) for log lines and
//! user-facing error notifications.

use std::error::Error;
use std::fmt;

use serde::Serialize;

/// A flattened view of an error and its causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// The error's own message.
    pub message: String,
    /// Messages of each `source()` cause, outermost first.
    pub chain: Vec<String>,
}

impl ErrorInfo {
    /// Walks the error's `source()` chain and captures every message.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let message = err.to_string();
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        ErrorInfo { message, chain }
    }
}

impl fmt::Display for ErrorInfo {
    /// Renders as `"message: cause: deeper cause"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for cause in &self.chain {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}
