//! Integration tests for the store as the hub between settings, tabs, and
//! formatting — the way viewer clients actually wire it up.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use fitview_core::format::{format_distance, format_speed};
use fitview_core::settings::{self, DistanceUnit, SpeedUnit};
use fitview_core::state::{SetOptions, StateStore};
use fitview_core::tabs::TabManager;

#[test]
fn test_settings_change_reaches_chart_subscriber() {
    let store = StateStore::new();
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = Rc::clone(&seen);

    // Charts listen on the parent path and re-read typed settings on any
    // child change.
    let _subscription = store.subscribe("chartSettings", move |_, _, path| {
        seen_clone.borrow_mut().push(path.to_string());
    });

    settings::set_chart_setting(&store, "speedUnit", "mph");

    assert_eq!(*seen.borrow(), vec!["chartSettings.speedUnit".to_string()]);
    assert_eq!(settings::chart_settings(&store).speed_unit, SpeedUnit::Mph);
}

#[test]
fn test_formatters_honor_store_backed_preferences() {
    let store = StateStore::new();
    let prefs = settings::chart_settings(&store);
    assert_eq!(format_speed(10.0, prefs.speed_unit).unwrap(), "36.0 km/h");

    settings::set_chart_setting(&store, "speedUnit", "mph");
    settings::set_chart_setting(&store, "distanceUnit", "mi");
    let prefs = settings::chart_settings(&store);
    assert_eq!(format_speed(10.0, prefs.speed_unit).unwrap(), "22.4 mph");
    assert_eq!(
        format_distance(16093.44, prefs.distance_unit).unwrap(),
        "10.00 mi"
    );
    // Explicit metric still works regardless of stored preference.
    assert_eq!(format_distance(16093.44, DistanceUnit::Km).unwrap(), "16.09 km");
}

#[test]
fn test_tab_switch_notifies_both_tab_and_ui_subscribers() {
    let store = Rc::new(StateStore::new());
    let manager = TabManager::new(Rc::clone(&store), &["summary", "charts", "map"]);

    let events: Rc<RefCell<Vec<(String, Value)>>> = Rc::new(RefCell::new(Vec::new()));

    let events_tab = Rc::clone(&events);
    let _tab_sub = manager.on_change(move |new, _, _| {
        events_tab.borrow_mut().push(("tab".to_string(), new.clone()));
    });
    let events_ui = Rc::clone(&events);
    let _ui_sub = store.subscribe("ui", move |new, _, _| {
        events_ui.borrow_mut().push(("ui".to_string(), new.clone()));
    });

    manager.activate("map", "buttonRow");

    // Exact-path subscriber fires before the ancestor, both with the leaf value.
    assert_eq!(
        *events.borrow(),
        vec![
            ("tab".to_string(), json!("map")),
            ("ui".to_string(), json!("map")),
        ]
    );
}

#[test]
fn test_loaded_file_lifecycle_round_trip() {
    let store = StateStore::new();

    store.set_with(
        "file.summary",
        json!({"sport": "running", "distance": 10000.0}),
        SetOptions::with_source("fileLoader"),
    );
    store.update("file.summary", json!({"distance": 10500.0}));

    assert_eq!(
        store.get("file.summary"),
        Some(json!({"sport": "running", "distance": 10500.0}))
    );

    // Closing the file clears only the file subtree.
    store.reset_path("file");
    assert_eq!(store.get("file"), None);
    assert_eq!(store.get("ui.activeTab"), Some(json!("summary")));
}

#[test]
fn test_reset_restores_defaults_after_a_session() {
    let store = Rc::new(StateStore::new());
    let manager = TabManager::new(Rc::clone(&store), &["summary", "charts"]);
    manager.activate("charts", "test");
    settings::set_chart_setting(&store, "speedUnit", "mph");

    store.reset();

    assert_eq!(store.get("ui.activeTab"), Some(json!("summary")));
    assert_eq!(
        settings::chart_settings(&store).speed_unit,
        SpeedUnit::Kmh
    );
}

#[test]
fn test_subscriber_panic_does_not_break_tab_sync() {
    let store = Rc::new(StateStore::new());
    let manager = TabManager::new(Rc::clone(&store), &["summary", "charts"]);

    let _bad = manager.on_change(|_, _, _| panic!("renderer crashed"));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = Rc::clone(&seen);
    let _good = manager.on_change(move |new, _, _| {
        seen_clone.borrow_mut().push(new.clone());
    });

    manager.activate("charts", "test");

    assert_eq!(*seen.borrow(), vec![json!("charts")]);
    assert_eq!(manager.active_tab().as_deref(), Some("charts"));
}
