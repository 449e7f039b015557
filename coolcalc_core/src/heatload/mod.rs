//! # Heat Load Aggregator
//!
//! Pure, deterministic mapping from the three input records to a
//! [`HeatLoadResult`]. No side effects, no error conditions: out-of-range
//! inputs flow through to a nonsensical but non-crashing result.
//!
//! # Overview
//!
//! - [`transmission`] - conduction through the envelope surfaces
//! - [`product`] - three-stage freezing model over a 24 h pulldown
//! - [`infiltration`] - air-change load from door openings
//! - [`internal`] - occupancy, lighting, motors, placeholders
//!
//! The aggregate applies a fixed 20% safety factor and converts to tons of
//! refrigeration for both the base and design figures.
//!
//! # Example
//!
//! ```rust
//! use coolcalc_core::heatload::calculate_freezer_heat_load;
//! use coolcalc_core::params::{RoomParameters, ProductParameters, MiscParameters};
//!
//! let result = calculate_freezer_heat_load(
//!     &RoomParameters::default(),
//!     &ProductParameters::default(),
//!     &MiscParameters::default(),
//! );
//!
//! println!("Design capacity: {:.2} TR", result.design_capacity_tr);
//! ```

pub mod infiltration;
pub mod internal;
pub mod product;
pub mod transmission;

pub use infiltration::{infiltration_load, InfiltrationLoad};
pub use internal::{internal_loads, InternalLoads};
pub use product::{product_loads, ProductLoads, COOLING_DURATION_HR};
pub use transmission::{transmission_loads, TransmissionLoads};

use serde::{Deserialize, Serialize};

use crate::params::{MiscParameters, ProductParameters, RoomParameters};
use crate::units::KW_PER_TR;

/// Fixed design margin applied on top of the computed base load
pub const SAFETY_FACTOR: f64 = 1.2;

/// Btu/h per kW, for the imperial air-quantity formula
const BTU_PER_HR_PER_KW: f64 = 3412.142;

/// Standard imperial air-handling factor, Btu/(h·CFM·°F)
const AIR_HANDLING_FACTOR: f64 = 1.08;

/// Fixed supply-air temperature differential for air-quantity sizing, °F
const SUPPLY_AIR_DELTA_F: f64 = 10.0;

/// Complete heat-load result record.
///
/// Derived, immutable, recomputed on every input change; all loads in kW,
/// capacities in kW and TR, air quantity in CFM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatLoadResult {
    // Transmission
    /// Conduction through the walls
    pub wall_load_kw: f64,
    /// Conduction through the ceiling
    pub ceiling_load_kw: f64,
    /// Conduction through the floor
    pub floor_load_kw: f64,
    /// Sum of the three surface loads
    pub total_transmission_kw: f64,

    // Product (freezing process)
    /// Sensible stage above the freezing point
    pub before_freezing_kw: f64,
    /// Latent heat of freezing
    pub latent_freezing_kw: f64,
    /// Sensible stage below the freezing point
    pub after_freezing_kw: f64,
    /// Sum of the three product stages
    pub total_product_kw: f64,

    // Infiltration
    /// Air-change load
    pub air_change_kw: f64,

    // Internal
    /// Product respiration (placeholder, zero for frozen product)
    pub respiration_kw: f64,
    /// Fan/equipment motor heat
    pub equipment_kw: f64,
    /// Lighting heat
    pub light_kw: f64,
    /// Defrost/heater coil heat (placeholder)
    pub heater_kw: f64,
    /// Occupancy heat
    pub occupancy_kw: f64,
    /// Sum of the internal loads
    pub total_misc_kw: f64,

    // Heat distribution
    /// Sensible share of the total load
    pub sensible_heat_kw: f64,
    /// Latent share of the total load
    pub latent_heat_kw: f64,
    /// Required air quantity in CFM from the sensible load
    pub air_qty_required_cfm: f64,

    // Aggregate capacity
    /// Base load: exact sum of transmission + product + infiltration + misc
    pub total_load_kw: f64,
    /// Base load in tons of refrigeration
    pub total_load_tr: f64,
    /// Base load with the 20% safety factor applied
    pub design_load_kw: f64,
    /// Design load in tons of refrigeration
    pub design_capacity_tr: f64,
}

/// Run the full freezer heat-load aggregation.
///
/// Deterministic and side-effect free. Optional miscellaneous inputs are
/// resolved through the single default-if-absent policy before use; product
/// mass comes from the daily loading figure in [`MiscParameters`].
pub fn calculate_freezer_heat_load(
    room: &RoomParameters,
    product: &ProductParameters,
    misc: &MiscParameters,
) -> HeatLoadResult {
    let resolved = misc.resolved();

    let trans = transmission_loads(room);
    let prod = product_loads(product, resolved.capacity_required_kg);
    let infil = infiltration_load(room);
    let intern = internal_loads(&resolved);

    let total_load_kw =
        trans.total_kw() + prod.total_kw() + infil.air_change_kw + intern.total_kw();
    let design_load_kw = total_load_kw * SAFETY_FACTOR;

    // Only the freezing stage removes phase-change heat; everything else in
    // this model is sensible.
    let latent_heat_kw = prod.latent_kw;
    let sensible_heat_kw = total_load_kw - latent_heat_kw;

    HeatLoadResult {
        wall_load_kw: trans.wall_kw,
        ceiling_load_kw: trans.ceiling_kw,
        floor_load_kw: trans.floor_kw,
        total_transmission_kw: trans.total_kw(),

        before_freezing_kw: prod.before_freezing_kw,
        latent_freezing_kw: prod.latent_kw,
        after_freezing_kw: prod.after_freezing_kw,
        total_product_kw: prod.total_kw(),

        air_change_kw: infil.air_change_kw,

        respiration_kw: intern.respiration_kw,
        equipment_kw: intern.equipment_kw,
        light_kw: intern.light_kw,
        heater_kw: intern.heater_kw,
        occupancy_kw: intern.occupancy_kw,
        total_misc_kw: intern.total_kw(),

        sensible_heat_kw,
        latent_heat_kw,
        air_qty_required_cfm: air_quantity_cfm(sensible_heat_kw),

        total_load_kw,
        total_load_tr: total_load_kw / KW_PER_TR,
        design_load_kw,
        design_capacity_tr: design_load_kw / KW_PER_TR,
    }
}

/// Required air quantity from the sensible load at the standard 1.08 factor
/// and a fixed supply-air differential.
fn air_quantity_cfm(sensible_kw: f64) -> f64 {
    sensible_kw * BTU_PER_HR_PER_KW / (AIR_HANDLING_FACTOR * SUPPLY_AIR_DELTA_F)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TempUnit;

    const EPS: f64 = 1e-9;

    fn full_inputs() -> (RoomParameters, ProductParameters, MiscParameters) {
        (
            RoomParameters::default(),
            ProductParameters::default(),
            MiscParameters {
                occupancy_count: Some(2.0),
                fan_motor_rating: Some(1500.0),
                light_power: Some(400.0),
                equipment_usage_hours: Some(20.0),
                capacity_required: Some(2000.0),
            },
        )
    }

    #[test]
    fn test_total_is_exact_sum_of_groups() {
        let (room, product, misc) = full_inputs();
        let r = calculate_freezer_heat_load(&room, &product, &misc);

        let sum =
            r.total_transmission_kw + r.total_product_kw + r.air_change_kw + r.total_misc_kw;
        assert!((r.total_load_kw - sum).abs() < EPS);
    }

    #[test]
    fn test_design_capacity_tr_formula() {
        let (room, product, misc) = full_inputs();
        let r = calculate_freezer_heat_load(&room, &product, &misc);

        assert!((r.design_capacity_tr - r.total_load_kw * 1.2 / 3.517).abs() < EPS);
        assert!((r.total_load_tr - r.total_load_kw / 3.517).abs() < EPS);
        assert!((r.design_load_kw - r.total_load_kw * 1.2).abs() < EPS);
    }

    #[test]
    fn test_group_totals_match_components() {
        let (room, product, misc) = full_inputs();
        let r = calculate_freezer_heat_load(&room, &product, &misc);

        assert!(
            (r.total_transmission_kw - (r.wall_load_kw + r.ceiling_load_kw + r.floor_load_kw))
                .abs()
                < EPS
        );
        assert!(
            (r.total_product_kw
                - (r.before_freezing_kw + r.latent_freezing_kw + r.after_freezing_kw))
                .abs()
                < EPS
        );
        assert!(
            (r.total_misc_kw
                - (r.respiration_kw + r.equipment_kw + r.light_kw + r.heater_kw + r.occupancy_kw))
                .abs()
                < EPS
        );
    }

    #[test]
    fn test_sensible_latent_split() {
        let (room, product, misc) = full_inputs();
        let r = calculate_freezer_heat_load(&room, &product, &misc);

        assert!((r.latent_heat_kw - r.latent_freezing_kw).abs() < EPS);
        assert!((r.sensible_heat_kw + r.latent_heat_kw - r.total_load_kw).abs() < EPS);
        assert!(r.air_qty_required_cfm > 0.0);
    }

    #[test]
    fn test_degenerate_product_contributes_nothing() {
        let (room, _, misc) = full_inputs();
        let product = ProductParameters {
            product_entering_temp: -18.0,
            product_final_temp: -18.0,
            freezing_temp: -18.0,
            temp_unit: TempUnit::Celsius,
            ..ProductParameters::default()
        };
        let r = calculate_freezer_heat_load(&room, &product, &misc);
        assert_eq!(r.total_product_kw, 0.0);
        assert_eq!(r.latent_heat_kw, 0.0);
    }

    #[test]
    fn test_empty_misc_defaults() {
        let (room, product, _) = full_inputs();
        let r = calculate_freezer_heat_load(&room, &product, &MiscParameters::default());

        // No product mass, no occupants, no powered equipment
        assert_eq!(r.total_product_kw, 0.0);
        assert_eq!(r.total_misc_kw, 0.0);
        // Envelope and infiltration still load the room
        assert!(r.total_transmission_kw > 0.0);
        assert!(r.air_change_kw > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let (room, product, misc) = full_inputs();
        let a = calculate_freezer_heat_load(&room, &product, &misc);
        let b = calculate_freezer_heat_load(&room, &product, &misc);
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_serialization() {
        let (room, product, misc) = full_inputs();
        let r = calculate_freezer_heat_load(&room, &product, &misc);

        let json = serde_json::to_string(&r).unwrap();
        let roundtrip: HeatLoadResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, roundtrip);
    }
}
