//! Tab state management over the shared store.
//!
//! The active tab lives in the store at `ui.activeTab` so every client
//! surface (button row, content panels, deep links) stays in sync by
//! subscribing to that one path. This module owns the registry of valid
//! tab names and guards writes; rendering is the client's job.

use std::rc::Rc;

use serde_json::Value;

use crate::state::{SetOptions, StateStore, Subscription};

/// Store path holding the active tab name.
pub const ACTIVE_TAB_PATH: &str = "ui.activeTab";

/// The tab every fresh session starts on.
pub const DEFAULT_TAB: &str = "summary";

/// Source tag attached to tab writes made by the manager itself.
const TAB_SOURCE: &str = "tabManager";

/// Validated access to the active-tab state.
pub struct TabManager {
    store: Rc<StateStore>,
    tabs: Vec<String>,
}

impl TabManager {
    /// Registers the known tabs and repairs the stored active tab if it
    /// isn't one of them (falls back to the first registered tab).
    pub fn new(store: Rc<StateStore>, tabs: &[&str]) -> Self {
        let manager = TabManager {
            store,
            tabs: tabs.iter().map(|name| name.to_string()).collect(),
        };
        let active = manager.active_tab();
        let valid = active
            .as_deref()
            .is_some_and(|name| manager.is_registered(name));
        if !valid {
            if let Some(first) = manager.tabs.first() {
                tracing::debug!(
                    stored = ?active,
                    fallback = %first,
                    "Stored active tab not registered; falling back"
                );
                manager
                    .store
                    .set_with(ACTIVE_TAB_PATH, first.as_str(), SetOptions::with_source(TAB_SOURCE));
            }
        }
        manager
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.tabs.iter().any(|tab| tab == name)
    }

    /// The currently active tab, read straight from the store.
    pub fn active_tab(&self) -> Option<String> {
        self.store
            .get(ACTIVE_TAB_PATH)
            .and_then(|value| value.as_str().map(str::to_string))
    }

    /// Activates a registered tab, attributing the write to `source`.
    ///
    /// Unknown tabs are rejected with a warning and no write; re-activating
    /// the current tab is a no-op (no redundant dispatch).
    pub fn activate(&self, name: &str, source: &str) {
        if !self.is_registered(name) {
            tracing::warn!(tab = %name, source = %source, "Ignoring activation of unregistered tab");
            return;
        }
        if self.active_tab().as_deref() == Some(name) {
            return;
        }
        self.store
            .set_with(ACTIVE_TAB_PATH, name, SetOptions::with_source(source));
    }

    /// Subscribes to active-tab changes. The callback receives the new tab
    /// value, the previous one, and the changed path.
    pub fn on_change(
        &self,
        callback: impl Fn(&Value, Option<&Value>, &str) + 'static,
    ) -> Subscription {
        self.store.subscribe(ACTIVE_TAB_PATH, callback)
    }
}
