//! Imperial to metric conversion
//!
//! Inputs reach this layer already validated as non-negative whole numbers,
//! so both functions are total.

use super::types::{Feet, Inches, Kilograms, Meters, Pounds, Stone};

/// Combine a feet + inches height into meters
pub fn imperial_height_to_meters(feet: Feet, inches: Inches) -> Meters {
    feet.to_meters() + inches.to_meters()
}

/// Combine a stone + pounds weight into kilograms
pub fn imperial_weight_to_kg(stone: Stone, pounds: Pounds) -> Kilograms {
    stone.to_kilograms() + pounds.to_kilograms()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_five_seven() {
        let m = imperial_height_to_meters(Feet::new(5.0), Inches::new(7.0));
        assert!((m.value() - 1.7018).abs() < 1e-9);
    }

    #[test]
    fn test_height_five_ten() {
        let m = imperial_height_to_meters(Feet::new(5.0), Inches::new(10.0));
        assert!((m.value() - 1.778).abs() < 1e-9);
    }

    #[test]
    fn test_inches_only() {
        // 12 inches is a foot
        let a = imperial_height_to_meters(Feet::ZERO, Inches::new(12.0));
        let b = imperial_height_to_meters(Feet::new(1.0), Inches::ZERO);
        assert!((a.value() - b.value()).abs() < 1e-9);
    }

    #[test]
    fn test_weight_eleven_stone() {
        let kg = imperial_weight_to_kg(Stone::new(11.0), Pounds::ZERO);
        assert!((kg.value() - 69.853).abs() < 0.001);
    }

    #[test]
    fn test_weight_twelve_three() {
        let kg = imperial_weight_to_kg(Stone::new(12.0), Pounds::new(3.0));
        assert!((kg.value() - 77.564).abs() < 0.001);
    }

    #[test]
    fn test_zero_is_zero() {
        assert_eq!(imperial_height_to_meters(Feet::ZERO, Inches::ZERO), Meters::ZERO);
        assert_eq!(imperial_weight_to_kg(Stone::ZERO, Pounds::ZERO), Kilograms::ZERO);
    }
}
