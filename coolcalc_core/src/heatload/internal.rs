//! # Internal (Miscellaneous) Loads
//!
//! Heat released inside the room by people, lights, fan motors, defrost
//! heaters, and product respiration, normalized over the 24 h reference
//! period:
//!
//! - Occupancy: headcount × a fixed per-person heat equivalent (continuous)
//! - Lighting and fan/equipment: rated power × (usage hours / 24)
//! - Heater coils and respiration: zero placeholders (frozen product does
//!   not respire; defrost heat is not modeled)

use serde::{Deserialize, Serialize};

use crate::params::ResolvedMisc;

/// Heat equivalent per occupant working in a freezer room, watts
pub const OCCUPANCY_HEAT_W_PER_PERSON: f64 = 270.0;

/// Hours in the daily reference period
pub const REFERENCE_PERIOD_HR: f64 = 24.0;

/// Per-source internal loads in kW.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InternalLoads {
    /// Occupancy heat
    pub occupancy_kw: f64,
    /// Lighting heat
    pub light_kw: f64,
    /// Fan/equipment motor heat
    pub equipment_kw: f64,
    /// Defrost/heater coil heat (placeholder, zero)
    pub heater_kw: f64,
    /// Product respiration heat (placeholder, zero for frozen product)
    pub respiration_kw: f64,
}

impl InternalLoads {
    /// Total miscellaneous load in kW
    pub fn total_kw(&self) -> f64 {
        self.occupancy_kw + self.light_kw + self.equipment_kw + self.heater_kw + self.respiration_kw
    }
}

/// Compute the internal loads from resolved miscellaneous inputs.
pub fn internal_loads(misc: &ResolvedMisc) -> InternalLoads {
    let usage_fraction = misc.equipment_usage_hours / REFERENCE_PERIOD_HR;

    InternalLoads {
        occupancy_kw: misc.occupancy_count * OCCUPANCY_HEAT_W_PER_PERSON / 1000.0,
        light_kw: misc.light_power_w * usage_fraction / 1000.0,
        equipment_kw: misc.fan_motor_rating_w * usage_fraction / 1000.0,
        heater_kw: 0.0,
        respiration_kw: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MiscParameters;

    #[test]
    fn test_all_zero_inputs_reduce_to_respiration_term() {
        // occupancy = fan = light = 0 → total is the respiration placeholder
        let misc = MiscParameters {
            occupancy_count: Some(0.0),
            fan_motor_rating: Some(0.0),
            light_power: Some(0.0),
            equipment_usage_hours: Some(20.0),
            capacity_required: Some(0.0),
        };
        let loads = internal_loads(&misc.resolved());
        assert_eq!(loads.total_kw(), loads.respiration_kw);
        assert_eq!(loads.total_kw(), 0.0);
    }

    #[test]
    fn test_occupancy_heat() {
        let misc = MiscParameters {
            occupancy_count: Some(2.0),
            ..MiscParameters::default()
        };
        let loads = internal_loads(&misc.resolved());
        assert!((loads.occupancy_kw - 0.54).abs() < 1e-12);
    }

    #[test]
    fn test_usage_fraction_scales_powered_loads() {
        let misc = MiscParameters {
            fan_motor_rating: Some(1200.0),
            light_power: Some(600.0),
            equipment_usage_hours: Some(12.0),
            ..MiscParameters::default()
        };
        let loads = internal_loads(&misc.resolved());
        assert!((loads.equipment_kw - 0.6).abs() < 1e-12);
        assert!((loads.light_kw - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_placeholders_are_zero() {
        let loads = internal_loads(&MiscParameters::default().resolved());
        assert_eq!(loads.heater_kw, 0.0);
        assert_eq!(loads.respiration_kw, 0.0);
    }
}
