//! Shared Application State
//!
//! One in-memory tree of viewer state, addressed by dot-separated string
//! paths and observed through synchronous subscriptions.
//!
//! ```text
//! Tab manager ──┐
//! Settings   ───┼──> StateStore ──> subscribers (tab sync, charts, ...)
//! File loader ──┘        │
//!                        └──> bounded change history (diagnostics)
//! ```
//!
//! # Module Structure
//!
//! - [`store`](self): the [`StateStore`] itself and [`Subscription`] handles
//! - `path`: dot-path parsing and ancestor enumeration
//! - `types`: [`SetOptions`] and the [`HistoryEntry`] log record
//!
//! # Key Entry Points
//!
//! - [`StateStore::get`] / [`StateStore::set`]: read and write by path
//! - [`StateStore::subscribe`]: observe a path and its descendants
//! - [`StateStore::reset`]: restore the fixed initial shape

mod path;
mod store;
mod types;

pub use store::{StateStore, Subscription};
pub use types::{HistoryEntry, SetOptions, MAX_HISTORY_SIZE};
