//! # Product (Freezing Process) Loads
//!
//! Three-stage freezing model for product pulled down from its entering
//! temperature to its final storage temperature over a fixed 24 h cycle:
//!
//! 1. Sensible heat above the freezing point: m · cp_above · (T_in − T_fz)
//! 2. Latent heat of freezing: m · h_latent (only if the product actually
//!    passes through its freezing point)
//! 3. Sensible heat below the freezing point: m · cp_below · (T_fz − T_final)
//!
//! Each stage is an energy in kJ divided by the cycle duration to yield kW.

use serde::{Deserialize, Serialize};

use crate::params::ProductParameters;

/// Pulldown duration for the product load (hours)
pub const COOLING_DURATION_HR: f64 = 24.0;

/// Pulldown duration in seconds (kJ / s = kW)
const COOLING_DURATION_S: f64 = COOLING_DURATION_HR * 3600.0;

/// Per-stage product loads in kW.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductLoads {
    /// Sensible stage above the freezing point
    pub before_freezing_kw: f64,
    /// Latent heat of freezing
    pub latent_kw: f64,
    /// Sensible stage below the freezing point
    pub after_freezing_kw: f64,
}

impl ProductLoads {
    /// Total product load in kW
    pub fn total_kw(&self) -> f64 {
        self.before_freezing_kw + self.latent_kw + self.after_freezing_kw
    }
}

/// Compute the three-stage freezing load for `mass_kg` of product.
///
/// When entering == freezing == final every stage evaluates to zero,
/// including the latent stage: no freezing process takes place unless the
/// final temperature is below the freezing point.
pub fn product_loads(product: &ProductParameters, mass_kg: f64) -> ProductLoads {
    let entering_c = product.entering_temp_c();
    let freezing_c = product.freezing_temp_c();
    let final_c = product.final_temp_c();

    let before_kj = mass_kg * product.cp_above_freezing * (entering_c - freezing_c);

    let latent_kj = if final_c < freezing_c {
        mass_kg * product.latent_heat
    } else {
        0.0
    };

    let after_kj = mass_kg * product.cp_below_freezing * (freezing_c - final_c);

    ProductLoads {
        before_freezing_kw: before_kj / COOLING_DURATION_S,
        latent_kw: latent_kj / COOLING_DURATION_S,
        after_freezing_kw: after_kj / COOLING_DURATION_S,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TempUnit;

    fn generic_product() -> ProductParameters {
        ProductParameters {
            product_entering_temp: 25.0,
            product_final_temp: -18.0,
            freezing_temp: -2.0,
            cp_above_freezing: 3.2,
            cp_below_freezing: 1.7,
            latent_heat: 233.0,
            temp_unit: TempUnit::Celsius,
        }
    }

    #[test]
    fn test_hand_calculation() {
        let loads = product_loads(&generic_product(), 1000.0);

        // 1000 * 3.2 * 27 kJ over 86400 s
        assert!((loads.before_freezing_kw - 1.0).abs() < 1e-9);
        // 1000 * 233 / 86400
        assert!((loads.latent_kw - 2.696759).abs() < 1e-5);
        // 1000 * 1.7 * 16 / 86400
        assert!((loads.after_freezing_kw - 0.314815).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_equal_temperatures() {
        // entering == freezing == final: every stage must be exactly zero
        let product = ProductParameters {
            product_entering_temp: -18.0,
            product_final_temp: -18.0,
            freezing_temp: -18.0,
            ..generic_product()
        };
        let loads = product_loads(&product, 500.0);
        assert_eq!(loads.before_freezing_kw, 0.0);
        assert_eq!(loads.latent_kw, 0.0);
        assert_eq!(loads.after_freezing_kw, 0.0);
        assert_eq!(loads.total_kw(), 0.0);
    }

    #[test]
    fn test_no_latent_when_chilled_only() {
        // Final temperature at the freezing point: product chills but does
        // not freeze, so no latent stage
        let product = ProductParameters {
            product_final_temp: -2.0,
            ..generic_product()
        };
        let loads = product_loads(&product, 1000.0);
        assert_eq!(loads.latent_kw, 0.0);
        assert_eq!(loads.after_freezing_kw, 0.0);
        assert!(loads.before_freezing_kw > 0.0);
    }

    #[test]
    fn test_zero_mass_zero_load() {
        let loads = product_loads(&generic_product(), 0.0);
        assert_eq!(loads.total_kw(), 0.0);
    }

    #[test]
    fn test_load_scales_linearly_with_mass() {
        let one = product_loads(&generic_product(), 1000.0).total_kw();
        let two = product_loads(&generic_product(), 2000.0).total_kw();
        assert!((two - 2.0 * one).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_inputs_match_celsius() {
        let celsius = product_loads(&generic_product(), 1000.0);
        let fahrenheit = product_loads(
            &ProductParameters {
                product_entering_temp: 77.0,
                product_final_temp: -0.4,
                freezing_temp: 28.4,
                temp_unit: TempUnit::Fahrenheit,
                ..generic_product()
            },
            1000.0,
        );
        assert!((celsius.total_kw() - fahrenheit.total_kw()).abs() < 1e-9);
    }
}
