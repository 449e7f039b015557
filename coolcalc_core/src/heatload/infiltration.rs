//! # Infiltration (Air-Change) Load
//!
//! Heat gained from warm ambient air exchanged through door openings,
//! estimated from the room volume, an empirical air-change rate, and a
//! simplified enthalpy differential:
//!
//! Q = V · n · ρ · cp · ΔT · f_moisture / 86400
//!
//! where n is air changes per 24 h and f_moisture bumps the dry-air figure
//! to account for the latent content of infiltrating air.

use serde::{Deserialize, Serialize};

use crate::params::RoomParameters;

/// Density of air entering the room, kg/m³
pub const AIR_DENSITY_KG_M3: f64 = 1.2;

/// Specific heat of air, kJ/(kg·K)
pub const AIR_CP_KJ_KG_K: f64 = 1.006;

/// Multiplier approximating the latent (moisture) share of the infiltration
/// enthalpy differential
pub const MOISTURE_ENTHALPY_FACTOR: f64 = 1.25;

/// Empirical coefficient for the volume-derived air-change rate:
/// n = 70 / sqrt(V), the conventional rule for freezer rooms
const AIR_CHANGE_COEFFICIENT: f64 = 70.0;

/// Air changes per 24 h for a freezer room of the given internal volume.
///
/// Returns zero for non-positive volumes so degenerate rooms contribute no
/// infiltration load instead of NaN.
pub fn air_changes_per_day(volume_m3: f64) -> f64 {
    if volume_m3 <= 0.0 {
        return 0.0;
    }
    AIR_CHANGE_COEFFICIENT / volume_m3.sqrt()
}

/// Infiltration load in kW.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InfiltrationLoad {
    /// Air-change load
    pub air_change_kw: f64,
}

/// Compute the air-change load for the room.
pub fn infiltration_load(room: &RoomParameters) -> InfiltrationLoad {
    let volume = room.volume_m3();
    let changes = air_changes_per_day(volume);
    let dt = room.temp_differential_c();

    // Exchanged air mass per day (kg) times enthalpy differential (kJ/kg),
    // spread over 86400 s
    let daily_kj =
        volume * changes * AIR_DENSITY_KG_M3 * AIR_CP_KJ_KG_K * dt * MOISTURE_ENTHALPY_FACTOR;

    InfiltrationLoad {
        air_change_kw: daily_kj / 86400.0,
    }
}
