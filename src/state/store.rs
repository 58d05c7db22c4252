//! The shared application state store.
//!
//! A single in-memory JSON tree addressed by dot-separated paths, with
//! synchronous subscriber dispatch on every non-silent write. All viewer
//! state flows through one store instance: UI flags (`ui.activeTab`),
//! chart settings (`chartSettings.*`), and loaded-file data.
//!
//! # Dispatch
//!
//! A write to `"parent.child"` notifies subscribers of `"parent.child"`
//! first (in registration order), then subscribers of each strict ancestor
//! (`"parent"`), all receiving the changed leaf's new value, old value,
//! and full path. A panicking subscriber is caught and logged; it never
//! stops dispatch or reaches the writer.
//!
//! # Defensive Design
//!
//! No store operation panics or errors on malformed input:
//! - Malformed write paths (`"test."`, `"a..b"`) are logged and dropped.
//! - Reads through non-object intermediates return `None`.
//! - Resetting a path that doesn't exist is a no-op.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use chrono::Utc;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use super::path;
use super::types::{HistoryEntry, SetOptions, MAX_HISTORY_SIZE, UNKNOWN_SOURCE};

/// The fixed shape the store starts from, and returns to on [`StateStore::reset`].
static INITIAL_STATE: Lazy<Value> = Lazy::new(|| {
    json!({
        "ui": {
            "activeTab": "summary",
        },
        "chartSettings": {
            "speedUnit": "kmh",
            "distanceUnit": "km",
            "weightUnit": "kg",
            "heightUnit": "cm",
            "temperatureUnit": "celsius",
        },
    })
});

/// A registered subscriber callback, invoked as `(new_value, old_value, changed_path)`.
type Callback = Rc<dyn Fn(&Value, Option<&Value>, &str)>;

#[derive(Clone)]
struct Listener {
    id: u64,
    callback: Callback,
}

type ListenerMap = HashMap<String, Vec<Listener>>;

/// Handle returned by [`StateStore::subscribe`].
///
/// Call [`Subscription::unsubscribe`] to remove the callback; calling it
/// again is a no-op. Dropping the handle does NOT unsubscribe — a
/// subscription outlives its handle, matching fire-and-forget consumers
/// that never keep the handle around.
pub struct Subscription {
    listeners: Weak<RefCell<ListenerMap>>,
    path: String,
    id: u64,
}

impl Subscription {
    /// Removes exactly this callback from its path. Idempotent.
    pub fn unsubscribe(&self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let mut listeners = listeners.borrow_mut();
        if let Some(list) = listeners.get_mut(&self.path) {
            list.retain(|listener| listener.id != self.id);
            if list.is_empty() {
                listeners.remove(&self.path);
            }
        }
    }
}

/// Path-addressable application state with subscriptions and change history.
///
/// Synchronous and single-threaded: writes mutate the tree, record history,
/// and dispatch to subscribers inline on the calling stack. Re-entrant
/// writes from inside a subscriber callback are ordinary recursion.
///
/// Construct one shared instance at startup (wrapped in `Rc` when
/// callbacks need to write back) and pass it to consumers; each test can
/// build its own fresh store.
pub struct StateStore {
    tree: RefCell<Value>,
    listeners: Rc<RefCell<ListenerMap>>,
    history: RefCell<VecDeque<HistoryEntry>>,
    next_listener_id: Cell<u64>,
    initial: Value,
}

impl StateStore {
    /// Creates a store holding the application's fixed initial shape
    /// (`ui.activeTab = "summary"`, metric chart settings).
    pub fn new() -> Self {
        Self::with_initial(INITIAL_STATE.clone())
    }

    /// Creates a store with a caller-provided initial shape.
    ///
    /// The root must be an object; anything else is replaced with an empty
    /// object and logged, keeping the no-panic guarantee.
    pub fn with_initial(initial: Value) -> Self {
        let initial = if initial.is_object() {
            initial
        } else {
            tracing::warn!("Initial state is not an object; starting empty");
            Value::Object(Map::new())
        };
        StateStore {
            tree: RefCell::new(initial.clone()),
            listeners: Rc::new(RefCell::new(HashMap::new())),
            history: RefCell::new(VecDeque::new()),
            next_listener_id: Cell::new(0),
            initial,
        }
    }

    /// Reads the value at `path`.
    ///
    /// The empty path returns a clone of the whole tree. Unknown paths,
    /// malformed paths, and paths whose intermediate segments resolve to
    /// non-objects all return `None`. Never panics.
    pub fn get(&self, path: &str) -> Option<Value> {
        let tree = self.tree.borrow();
        if path.is_empty() {
            return Some(tree.clone());
        }
        let segments = path::segments(path)?;
        let mut current: &Value = &tree;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current.clone())
    }

    /// Writes `value` at `path` with default options (replace, log, notify).
    pub fn set(&self, path: &str, value: impl Into<Value>) {
        self.set_with(path, value, SetOptions::default());
    }

    /// Writes `value` at `path`.
    ///
    /// Missing intermediate segments are created as empty objects;
    /// non-object intermediates are replaced by empty objects rather than
    /// failing. With `options.merge`, a shallow merge applies when both
    /// the existing and new values are objects; otherwise the write is a
    /// full replace (arrays are never merged element-wise).
    ///
    /// A malformed path logs a warning and leaves the tree untouched.
    /// Every successful write is recorded in the history; the diagnostic
    /// log line and subscriber dispatch are skipped when `options.silent`.
    pub fn set_with(&self, path: &str, value: impl Into<Value>, options: SetOptions) {
        let Some(segments) = path::segments(path) else {
            tracing::warn!(path = %path, "Invalid state path; write dropped");
            return;
        };

        let value = value.into();
        let old_value = self.get(path);

        let new_value = if options.merge {
            merge_shallow(old_value.as_ref(), value)
        } else {
            value
        };

        {
            let mut tree = self.tree.borrow_mut();
            let mut current: &mut Value = &mut tree;
            // segments() never returns an empty list, so split_last is total here.
            if let Some((last, parents)) = segments.split_last() {
                for segment in parents {
                    let map = ensure_object(current);
                    current = map
                        .entry(segment.to_string())
                        .or_insert_with(|| Value::Object(Map::new()));
                }
                ensure_object(current).insert(last.to_string(), new_value.clone());
            }
        }

        self.record_history(path, old_value.clone(), new_value.clone(), &options);

        if !options.silent {
            tracing::debug!(
                path = %path,
                value = %new_value,
                source = %options.source.as_deref().unwrap_or(UNKNOWN_SOURCE),
                "State updated"
            );
            self.notify(path, &new_value, old_value.as_ref());
        }
    }

    /// Shallow-merges `partial` into the value at `path` and notifies.
    ///
    /// Equivalent to [`StateStore::set_with`] with `merge: true`.
    pub fn update(&self, path: &str, partial: impl Into<Value>) {
        self.set_with(
            path,
            partial,
            SetOptions {
                merge: true,
                ..SetOptions::default()
            },
        );
    }

    /// Registers `callback` for changes at `path` and every descendant.
    ///
    /// The callback receives `(new_value, old_value, changed_path)` for the
    /// changed leaf — a subscriber on `"parent"` sees `"parent.child"`
    /// changes with the child's values and full path. Multiple callbacks on
    /// one path fire in registration order.
    pub fn subscribe(
        &self,
        path: &str,
        callback: impl Fn(&Value, Option<&Value>, &str) + 'static,
    ) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(Listener {
                id,
                callback: Rc::new(callback),
            });
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            path: path.to_string(),
            id,
        }
    }

    /// Restores the tree to its initial shape.
    ///
    /// Listener registrations and history survive; no per-path dispatch
    /// fires — readers observe the reset on their next `get`.
    pub fn reset(&self) {
        *self.tree.borrow_mut() = self.initial.clone();
        tracing::debug!("State reset to initial shape");
    }

    /// Deletes only the subtree at `path`.
    ///
    /// Missing paths and paths through non-object intermediates are a
    /// silent no-op. No dispatch fires.
    pub fn reset_path(&self, path: &str) {
        let Some(segments) = path::segments(path) else {
            tracing::warn!(path = %path, "Invalid state path; reset dropped");
            return;
        };
        let Some((last, parents)) = segments.split_last() else {
            return;
        };
        let mut tree = self.tree.borrow_mut();
        let mut current: &mut Value = &mut tree;
        for segment in parents {
            match current.get_mut(*segment) {
                Some(next) => current = next,
                None => return,
            }
        }
        if let Some(map) = current.as_object_mut() {
            map.remove(*last);
        }
    }

    /// Snapshot of the retained change history, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.borrow().iter().cloned().collect()
    }

    fn record_history(
        &self,
        path: &str,
        old_value: Option<Value>,
        new_value: Value,
        options: &SetOptions,
    ) {
        let mut history = self.history.borrow_mut();
        history.push_back(HistoryEntry {
            path: path.to_string(),
            old_value,
            new_value,
            source: options
                .source
                .clone()
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            timestamp: Utc::now(),
        });
        while history.len() > MAX_HISTORY_SIZE {
            history.pop_front();
        }
    }

    fn notify(&self, path: &str, new_value: &Value, old_value: Option<&Value>) {
        let mut targets = Vec::with_capacity(4);
        targets.push(path.to_string());
        targets.extend(path::ancestors(path));

        for target in targets {
            // Clone the listener list so no borrow is held while callbacks
            // run; callbacks may subscribe, unsubscribe, or write back.
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .get(&target)
                .cloned()
                .unwrap_or_default();
            for listener in listeners {
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    (listener.callback)(new_value, old_value, path)
                }));
                if outcome.is_err() {
                    tracing::error!(
                        listener_path = %target,
                        changed_path = %path,
                        "State listener panicked; continuing dispatch"
                    );
                }
            }
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Makes `slot` an object in place, returning its map.
///
/// Non-object intermediates are overwritten so nested writes can't fail.
fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just made an object"),
    }
}

/// Shallow merge: `{..old, ..new}` when both sides are objects, otherwise
/// the new value wins outright.
fn merge_shallow(old_value: Option<&Value>, new_value: Value) -> Value {
    match (old_value.and_then(Value::as_object), new_value) {
        (Some(old_map), Value::Object(new_map)) => {
            let mut merged = old_map.clone();
            merged.extend(new_map);
            Value::Object(merged)
        }
        (_, other) => other,
    }
}
