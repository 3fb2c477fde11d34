//! Measurement newtypes and conversion constants
//!
//! Every length and mass the calculator handles carries its unit in its type,
//! so feet can't be passed where meters are expected.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per foot
pub const M_PER_FOOT: f64 = 0.3048;
/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Mass Conversion Constants (to kilograms)
// ============================================================================

/// Kilograms per stone
pub const KG_PER_STONE: f64 = 6.35029;
/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453592;

/// Round to one decimal place, halves away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

macro_rules! measurement {
    ($(#[$doc:meta])* $name:ident, $suffix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            pub const ZERO: Self = Self(0.0);

            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*}{}", p, self.0, $suffix),
                    None => write!(f, "{}{}", self.0, $suffix),
                }
            }
        }
    };
}

measurement!(
    /// Length in centimeters, the metric form's height unit
    Centimeters,
    "cm"
);
measurement!(
    /// Length in meters
    Meters,
    "m"
);
measurement!(
    /// Length in feet
    Feet,
    "ft"
);
measurement!(
    /// Length in inches
    Inches,
    "in"
);
measurement!(
    /// Mass in kilograms
    Kilograms,
    "kg"
);
measurement!(
    /// Mass in stone (14 lb)
    Stone,
    "st"
);
measurement!(
    /// Mass in pounds
    Pounds,
    "lb"
);

impl Centimeters {
    pub fn to_meters(self) -> Meters {
        Meters(self.0 / CM_PER_M)
    }
}

impl Meters {
    pub fn to_centimeters(self) -> Centimeters {
        Centimeters(self.0 * CM_PER_M)
    }

    /// Square of the length, in m²
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

impl Feet {
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * M_PER_FOOT)
    }
}

impl Inches {
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * M_PER_INCH)
    }
}

impl Stone {
    pub fn to_kilograms(self) -> Kilograms {
        Kilograms(self.0 * KG_PER_STONE)
    }
}

impl Pounds {
    pub fn to_kilograms(self) -> Kilograms {
        Kilograms(self.0 * KG_PER_POUND)
    }
}

impl Kilograms {
    /// The same mass at one decimal place
    pub fn rounded(self) -> Self {
        Self(round_to_tenth(self.0))
    }
}

impl std::ops::Add for Meters {
    type Output = Meters;

    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl std::ops::Add for Kilograms {
    type Output = Kilograms;

    fn add(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 + rhs.0)
    }
}
