//! # Transmission (Envelope Conduction) Loads
//!
//! Heat conducted through the wall, ceiling, and floor panels:
//!
//! Q = U · A · (T_ambient − T_room)
//!
//! with U derived from the insulation type and thickness. Results are in kW.
//!
//! ## Assumptions
//!
//! - All six surfaces share the same panel build-up
//! - The floor sees the same ambient differential as the walls (room is
//!   assumed elevated/inside a conditioned shell, not slab-on-grade)
//! - No solar gain correction

use serde::{Deserialize, Serialize};

use crate::params::RoomParameters;

/// Per-surface conduction loads in kW.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransmissionLoads {
    /// Conduction through the four walls
    pub wall_kw: f64,
    /// Conduction through the ceiling
    pub ceiling_kw: f64,
    /// Conduction through the floor
    pub floor_kw: f64,
}

impl TransmissionLoads {
    /// Total transmission load in kW
    pub fn total_kw(&self) -> f64 {
        self.wall_kw + self.ceiling_kw + self.floor_kw
    }
}

/// Compute per-surface conduction loads for the room envelope.
///
/// Pure and infallible: negative differentials or dimensions produce
/// negative or nonsensical loads rather than errors.
pub fn transmission_loads(room: &RoomParameters) -> TransmissionLoads {
    let u = room.u_value_w_m2k();
    let dt = room.temp_differential_c();

    // U (W/m²K) × A (m²) × ΔT (K) → W, then /1000 → kW
    let surface_kw = |area_m2: f64| u * area_m2 * dt / 1000.0;

    TransmissionLoads {
        wall_kw: surface_kw(room.wall_area_m2()),
        ceiling_kw: surface_kw(room.ceiling_area_m2()),
        floor_kw: surface_kw(room.floor_area_m2()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insulation::InsulationType;
    use crate::params::{LengthUnit, TempUnit};

    fn scenario_room(ambient_c: f64) -> RoomParameters {
        RoomParameters {
            length: 5.0,
            width: 4.0,
            height: 3.0,
            length_unit: LengthUnit::Meters,
            wall_insulation_thickness_mm: 150.0,
            insulation_type: InsulationType::Polyurethane,
            ambient_temp: ambient_c,
            room_temp: -18.0,
            temp_unit: TempUnit::Celsius,
        }
    }

    #[test]
    fn test_non_negative_when_ambient_above_room() {
        let loads = transmission_loads(&scenario_room(35.0));
        assert!(loads.wall_kw >= 0.0);
        assert!(loads.ceiling_kw >= 0.0);
        assert!(loads.floor_kw >= 0.0);
        assert!(loads.total_kw() >= 0.0);
    }

    #[test]
    fn test_hand_calculation() {
        // U = 0.023/0.15 = 0.15333 W/m²K, ΔT = 53 K
        // walls: 54 m² → 0.15333 * 54 * 53 / 1000 = 0.43884 kW
        let loads = transmission_loads(&scenario_room(35.0));
        assert!((loads.wall_kw - 0.438840).abs() < 1e-4);
        assert!((loads.ceiling_kw - 0.162533).abs() < 1e-4);
        assert!((loads.floor_kw - loads.ceiling_kw).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_in_temperature_differential() {
        // Increasing ambient−room strictly increases the transmission load
        let mut previous = transmission_loads(&scenario_room(20.0)).total_kw();
        for ambient in [25.0, 30.0, 35.0, 40.0, 45.0] {
            let current = transmission_loads(&scenario_room(ambient)).total_kw();
            assert!(
                current > previous,
                "load did not increase at ambient {ambient}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_zero_differential_zero_load() {
        let room = RoomParameters {
            ambient_temp: -18.0,
            room_temp: -18.0,
            ..scenario_room(0.0)
        };
        assert_eq!(transmission_loads(&room).total_kw(), 0.0);
    }

    #[test]
    fn test_thicker_insulation_reduces_load() {
        let thin = transmission_loads(&scenario_room(35.0));
        let thick = transmission_loads(&RoomParameters {
            wall_insulation_thickness_mm: 200.0,
            ..scenario_room(35.0)
        });
        assert!(thick.total_kw() < thin.total_kw());
    }
}
