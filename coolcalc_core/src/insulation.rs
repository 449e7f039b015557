//! # Insulation Database
//!
//! Insulation material definitions and thermal property lookups for cold-room
//! envelope panels.
//!
//! ## Example
//!
//! ```rust
//! use coolcalc_core::insulation::InsulationType;
//!
//! let puf = InsulationType::Polyurethane;
//! assert_eq!(puf.code(), "PUF");
//!
//! // U-value for a 150 mm panel
//! let u = puf.u_value_w_m2k(150.0);
//! assert!((u - 0.023 / 0.15).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Insulation panel materials commonly used in freezer rooms.
///
/// Conductivity values are nominal manufacturer figures at cold-room
/// operating temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsulationType {
    /// PUF - Rigid polyurethane foam panel
    Polyurethane,
    /// EPS - Expanded polystyrene panel
    ExpandedPolystyrene,
    /// PIR - Polyisocyanurate panel
    Polyisocyanurate,
    /// RW - Mineral/rock wool panel
    MineralWool,
}

impl InsulationType {
    /// All insulation types in standard order
    pub const ALL: [InsulationType; 4] = [
        InsulationType::Polyurethane,
        InsulationType::ExpandedPolystyrene,
        InsulationType::Polyisocyanurate,
        InsulationType::MineralWool,
    ];

    /// Short code used in UI pickers and serialized labels
    pub fn code(&self) -> &'static str {
        match self {
            InsulationType::Polyurethane => "PUF",
            InsulationType::ExpandedPolystyrene => "EPS",
            InsulationType::Polyisocyanurate => "PIR",
            InsulationType::MineralWool => "RW",
        }
    }

    /// Human-readable description
    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationType::Polyurethane => "Polyurethane foam (PUF)",
            InsulationType::ExpandedPolystyrene => "Expanded polystyrene (EPS)",
            InsulationType::Polyisocyanurate => "Polyisocyanurate (PIR)",
            InsulationType::MineralWool => "Mineral wool",
        }
    }

    /// Thermal conductivity k in W/(m·K)
    pub fn conductivity_w_mk(&self) -> f64 {
        match self {
            InsulationType::Polyurethane => 0.023,
            InsulationType::ExpandedPolystyrene => 0.035,
            InsulationType::Polyisocyanurate => 0.022,
            InsulationType::MineralWool => 0.040,
        }
    }

    /// Nominal panel density in kg/m³ (shown on report input sections)
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            InsulationType::Polyurethane => 40.0,
            InsulationType::ExpandedPolystyrene => 20.0,
            InsulationType::Polyisocyanurate => 32.0,
            InsulationType::MineralWool => 100.0,
        }
    }

    /// Overall heat-transfer coefficient U = k/t in W/(m²·K) for a panel of
    /// the given thickness in millimeters.
    ///
    /// A non-positive thickness yields an infinite U-value; the aggregator
    /// does not guard against it (nonsensical inputs produce nonsensical
    /// results without crashing).
    pub fn u_value_w_m2k(&self, thickness_mm: f64) -> f64 {
        self.conductivity_w_mk() / (thickness_mm / 1000.0)
    }
}

impl Default for InsulationType {
    fn default() -> Self {
        InsulationType::Polyurethane
    }
}

impl std::fmt::Display for InsulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(InsulationType::Polyurethane.code(), "PUF");
        assert_eq!(InsulationType::ExpandedPolystyrene.code(), "EPS");
        assert_eq!(InsulationType::Polyisocyanurate.code(), "PIR");
        assert_eq!(InsulationType::MineralWool.code(), "RW");
    }

    #[test]
    fn test_u_value_scales_inversely_with_thickness() {
        let thin = InsulationType::Polyurethane.u_value_w_m2k(75.0);
        let thick = InsulationType::Polyurethane.u_value_w_m2k(150.0);
        assert!(thin > thick);
        assert!((thin / thick - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_u_value_150mm_puf() {
        let u = InsulationType::Polyurethane.u_value_w_m2k(150.0);
        // k = 0.023 W/mK over 0.15 m
        assert!((u - 0.153333).abs() < 1e-4);
    }

    #[test]
    fn test_pir_beats_eps() {
        // PIR conducts less heat than EPS at the same thickness
        assert!(
            InsulationType::Polyisocyanurate.conductivity_w_mk()
                < InsulationType::ExpandedPolystyrene.conductivity_w_mk()
        );
    }

    #[test]
    fn test_serialization() {
        let ins = InsulationType::ExpandedPolystyrene;
        let json = serde_json::to_string(&ins).unwrap();
        assert_eq!(json, "\"ExpandedPolystyrene\"");

        let parsed: InsulationType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ins);
    }

    #[test]
    fn test_all_contains_all_variants() {
        assert_eq!(InsulationType::ALL.len(), 4);
    }
}
