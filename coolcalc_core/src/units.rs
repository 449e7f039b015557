//! # Unit Types
//!
//! Type-safe wrappers for the refrigeration units the engine converts
//! between. These provide compile-time safety against unit confusion while
//! remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Heat-load work uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! The engine works in SI internally and converts at the boundary:
//! - Temperature: degrees Celsius (°C), degrees Fahrenheit (°F)
//! - Length: meters (m), feet (ft), millimeters (mm)
//! - Power: kilowatts (kW), tons of refrigeration (TR = 3.517 kW)
//! - Airflow: cubic feet per minute (CFM)
//!
//! ## Example
//!
//! ```rust
//! use coolcalc_core::units::{Celsius, Fahrenheit, Kilowatts, TonsRefrigeration};
//!
//! let ambient: Celsius = Fahrenheit(95.0).into();
//! assert!((ambient.0 - 35.0).abs() < 1e-9);
//!
//! let capacity: TonsRefrigeration = Kilowatts(3.517).into();
//! assert!((capacity.0 - 1.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// One ton of refrigeration in kilowatts
pub const KW_PER_TR: f64 = 3.517;

/// One foot in meters
pub const M_PER_FT: f64 = 0.3048;

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in millimeters (insulation thickness)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * M_PER_FT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / M_PER_FT)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Power / Capacity Units
// ============================================================================

/// Thermal power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Refrigeration capacity in tons of refrigeration (1 TR = 3.517 kW)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonsRefrigeration(pub f64);

impl From<Kilowatts> for TonsRefrigeration {
    fn from(kw: Kilowatts) -> Self {
        TonsRefrigeration(kw.0 / KW_PER_TR)
    }
}

impl From<TonsRefrigeration> for Kilowatts {
    fn from(tr: TonsRefrigeration) -> Self {
        Kilowatts(tr.0 * KW_PER_TR)
    }
}

// ============================================================================
// Airflow Units
// ============================================================================

/// Airflow in cubic feet per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cfm(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Celsius);
impl_arithmetic!(Fahrenheit);
impl_arithmetic!(Meters);
impl_arithmetic!(Feet);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(TonsRefrigeration);
impl_arithmetic!(Cfm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        let c: Celsius = Fahrenheit(32.0).into();
        assert!((c.0).abs() < 1e-12);

        let c: Celsius = Fahrenheit(-0.4).into();
        assert!((c.0 - (-18.0)).abs() < 1e-9);
    }

    #[test]
    fn test_celsius_to_fahrenheit_roundtrip() {
        let original = Celsius(-18.0);
        let roundtrip: Celsius = Fahrenheit::from(original).into();
        assert!((roundtrip.0 - original.0).abs() < 1e-9);
    }

    #[test]
    fn test_feet_to_meters() {
        let m: Meters = Feet(10.0).into();
        assert!((m.0 - 3.048).abs() < 1e-12);
    }

    #[test]
    fn test_millimeters_to_meters() {
        let m: Meters = Millimeters(150.0).into();
        assert!((m.0 - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_kw_to_tr() {
        let tr: TonsRefrigeration = Kilowatts(7.034).into();
        assert!((tr.0 - 2.0).abs() < 1e-9);

        let kw: Kilowatts = TonsRefrigeration(1.0).into();
        assert!((kw.0 - 3.517).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilowatts(10.0);
        let b = Kilowatts(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let kw = Kilowatts(12.5);
        let json = serde_json::to_string(&kw).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Kilowatts = serde_json::from_str(&json).unwrap();
        assert_eq!(kw, roundtrip);
    }
}
