//! Display formatting for activity metrics.
//!
//! Formatters take SI values straight out of a FIT record plus the user's
//! unit preference, and return the display string shown in summaries and
//! chart axes. Invalid numeric input (NaN, infinities, values outside the
//! metric's domain) comes back as a [`CoreError`] rather than a garbage
//! string or a panic.

use crate::error::{CoreError, Result};
use crate::settings::{DistanceUnit, HeightUnit, SpeedUnit, TemperatureUnit, WeightUnit};
use crate::units;

fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::NonFinite { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(CoreError::Negative { field, value });
    }
    Ok(value)
}

/// Formats elapsed seconds as `"MM:SS"`, or `"H:MM:SS"` from one hour up.
///
/// Fractional seconds are rounded: `format_duration(65.0)` is `"1:05"`,
/// `format_duration(3661.0)` is `"1:01:01"`.
pub fn format_duration(seconds: f64) -> Result<String> {
    let seconds = require_non_negative("duration", seconds)?;
    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        Ok(format!("{hours}:{minutes:02}:{secs:02}"))
    } else {
        Ok(format!("{minutes}:{secs:02}"))
    }
}

/// Formats a distance in meters, two decimals: `"12.35 km"`, `"7.67 mi"`.
pub fn format_distance(meters: f64, unit: DistanceUnit) -> Result<String> {
    let meters = require_non_negative("distance", meters)?;
    Ok(match unit {
        DistanceUnit::Km => format!("{:.2} km", units::meters_to_kilometers(meters)),
        DistanceUnit::Mi => format!("{:.2} mi", units::meters_to_miles(meters)),
    })
}

/// Formats a speed in m/s, one decimal: `"36.0 km/h"`, `"22.4 mph"`.
pub fn format_speed(mps: f64, unit: SpeedUnit) -> Result<String> {
    let mps = require_non_negative("speed", mps)?;
    Ok(match unit {
        SpeedUnit::Kmh => format!("{:.1} km/h", units::mps_to_kmh(mps)),
        SpeedUnit::Mph => format!("{:.1} mph", units::mps_to_mph(mps)),
    })
}

/// Formats a speed as pace per distance unit: `"5:00 /km"`, `"8:03 /mi"`.
///
/// Pace is undefined at or below zero speed.
pub fn format_pace(mps: f64, unit: DistanceUnit) -> Result<String> {
    let mps = require_finite("speed", mps)?;
    if mps <= 0.0 {
        return Err(CoreError::PaceUndefined(mps));
    }
    let seconds_per_unit = match unit {
        DistanceUnit::Km => 1000.0 / mps,
        DistanceUnit::Mi => units::METERS_PER_MILE / mps,
    };
    let total = seconds_per_unit.round() as u64;
    let suffix = match unit {
        DistanceUnit::Km => "/km",
        DistanceUnit::Mi => "/mi",
    };
    Ok(format!("{}:{:02} {}", total / 60, total % 60, suffix))
}

/// Formats a weight in kilograms, one decimal: `"70.0 kg"`, `"154.3 lbs"`.
pub fn format_weight(kg: f64, unit: WeightUnit) -> Result<String> {
    let kg = require_non_negative("weight", kg)?;
    Ok(match unit {
        WeightUnit::Kg => format!("{kg:.1} kg"),
        WeightUnit::Lbs => format!("{:.1} lbs", units::kg_to_lbs(kg)),
    })
}

/// Formats a height in centimeters: `"180 cm"` or `"5'11\""`.
///
/// Imperial output rounds to whole inches and carries a full 12 inches
/// into the feet count, so 182.9 cm is `6'0"` rather than `5'12"`.
pub fn format_height(cm: f64, unit: HeightUnit) -> Result<String> {
    let cm = require_non_negative("height", cm)?;
    Ok(match unit {
        HeightUnit::Cm => format!("{cm:.0} cm"),
        HeightUnit::Ft => {
            let total_inches = units::cm_to_inches(cm);
            let mut feet = (total_inches / 12.0).floor() as u64;
            let mut inches = (total_inches - feet as f64 * 12.0).round() as u64;
            if inches == 12 {
                feet += 1;
                inches = 0;
            }
            format!("{feet}'{inches}\"")
        }
    })
}

/// Formats a temperature in Celsius, rounded to whole degrees:
/// `"21 °C"`, `"70 °F"`.
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> Result<String> {
    let celsius = require_finite("temperature", celsius)?;
    Ok(match unit {
        TemperatureUnit::Celsius => format!("{celsius:.0} °C"),
        TemperatureUnit::Fahrenheit => {
            format!("{:.0} °F", units::celsius_to_fahrenheit(celsius))
        }
    })
}
