//! Chart settings: unit preferences stored under `chartSettings.*`.
//!
//! The store holds settings as plain JSON so any client can write them
//! (`set_chart_setting(store, "speedUnit", "mph")`); this module gives
//! Rust consumers a typed view with graceful fallback — a missing or
//! malformed settings subtree reads as the metric defaults instead of
//! erroring.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{SetOptions, StateStore};

/// Store path holding all chart settings.
pub const CHART_SETTINGS_PATH: &str = "chartSettings";

/// Source tag attached to settings writes.
const SETTINGS_SOURCE: &str = "settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    Kmh,
    Mph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Ft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// User display preferences for charts and summaries. Defaults are metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    pub speed_unit: SpeedUnit,
    pub distance_unit: DistanceUnit,
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
    pub temperature_unit: TemperatureUnit,
}

/// Reads the full settings block, falling back to defaults when the
/// subtree is missing or doesn't deserialize.
pub fn chart_settings(store: &StateStore) -> ChartSettings {
    store
        .get(CHART_SETTINGS_PATH)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Reads a single raw setting value, `None` when unset.
pub fn chart_setting(store: &StateStore, key: &str) -> Option<Value> {
    store.get(&format!("{CHART_SETTINGS_PATH}.{key}"))
}

/// Writes a single setting, notifying subscribers of `chartSettings.*`.
pub fn set_chart_setting(store: &StateStore, key: &str, value: impl Into<Value>) {
    store.set_with(
        &format!("{CHART_SETTINGS_PATH}.{key}"),
        value,
        SetOptions::with_source(SETTINGS_SOURCE),
    );
}

/// Writes the full settings block (shallow merge over whatever is stored).
pub fn store_chart_settings(store: &StateStore, settings: &ChartSettings) {
    match serde_json::to_value(settings) {
        Ok(value) => store.set_with(
            CHART_SETTINGS_PATH,
            value,
            SetOptions {
                merge: true,
                source: Some(SETTINGS_SOURCE.to_string()),
                ..SetOptions::default()
            },
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to serialize chart settings; write dropped");
        }
    }
}
