//! Measurement units
//!
//! Typed lengths and masses plus the imperial conversions the form needs.

pub mod converter;
pub mod types;

pub use converter::{imperial_height_to_meters, imperial_weight_to_kg};
pub use types::{
    round_to_tenth, Centimeters, Feet, Inches, Kilograms, Meters, Pounds, Stone,
};
