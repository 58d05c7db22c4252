//! # fitview-core
//!
//! Core library for FitView, providing the shared state, unit conversion,
//! and display-formatting logic used by all viewer clients.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Dispatch to state
//!   subscribers happens inline on the writer's stack.
//! - **Not thread-safe**: Clients provide their own synchronization.
//! - **Graceful degradation**: Malformed paths, missing settings, and
//!   panicking subscribers are logged and contained, never propagated.
//! - **Single source of truth**: All client surfaces read and write the
//!   one [`StateStore`] instance created at startup.
//!
//! ## Quick Start
//!
//! ```rust
//! use fitview_core::StateStore;
//!
//! let store = StateStore::new();
//! let sub = store.subscribe("ui.activeTab", |new, old, path| {
//!     println!("{path}: {old:?} -> {new}");
//! });
//! store.set("ui.activeTab", "charts");
//! sub.unsubscribe();
//! ```

// Public modules
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod notifications;
pub mod settings;
pub mod state;
pub mod tabs;
pub mod units;

// Re-export commonly used items at crate root
pub use diagnostics::ErrorInfo;
pub use error::{CoreError, Result};
pub use notifications::{Notification, NotificationQueue, Severity};
pub use settings::{
    ChartSettings, DistanceUnit, HeightUnit, SpeedUnit, TemperatureUnit, WeightUnit,
};
pub use state::{HistoryEntry, SetOptions, StateStore, Subscription, MAX_HISTORY_SIZE};
pub use tabs::{TabManager, ACTIVE_TAB_PATH, DEFAULT_TAB};
