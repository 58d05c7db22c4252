//! Pure unit conversions for FIT activity data.
//!
//! FIT files record metric/SI quantities (meters, meters per second,
//! kilograms, degrees Celsius, semicircles for position); these helpers
//! convert them to whatever the user's display preference asks for.
//! All functions are total over finite input — domain policing (NaN,
//! negative distance) happens in the formatting layer.

/// Meters in one international mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Pounds in one kilogram.
pub const LBS_PER_KG: f64 = 2.204_622_621_85;

/// Centimeters in one inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Degrees per FIT semicircle (positions are stored as i32 semicircles).
const DEGREES_PER_SEMICIRCLE: f64 = 180.0 / 2_147_483_648.0;

pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * 3600.0 / METERS_PER_MILE
}

pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / 0.3048
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Converts a FIT position coordinate (semicircles) to degrees.
pub fn semicircles_to_degrees(semicircles: i32) -> f64 {
    semicircles as f64 * DEGREES_PER_SEMICIRCLE
}
