//! # Input Parameter Records
//!
//! The three parameter records fed to the heat-load aggregator:
//!
//! - [`RoomParameters`] - envelope geometry, insulation, and temperatures
//! - [`ProductParameters`] - product thermal properties for the freezing path
//! - [`MiscParameters`] - occupancy, lighting, motors, and product quantity
//!
//! All entities are transient: they are reconstructed from current UI state
//! on every recomputation and never stored. Numeric fields are plain `f64`
//! with runtime unit selectors ([`TempUnit`], [`LengthUnit`]); accessor
//! methods normalize to SI for the engine.
//!
//! ## Validation
//!
//! `validate()` methods exist for callers that want early feedback, but the
//! aggregator never invokes them: out-of-range inputs flow through to a
//! nonsensical, non-crashing result.
//!
//! ## Example
//!
//! ```rust
//! use coolcalc_core::params::{RoomParameters, TempUnit, LengthUnit};
//! use coolcalc_core::insulation::InsulationType;
//!
//! let room = RoomParameters {
//!     length: 5.0,
//!     width: 4.0,
//!     height: 3.0,
//!     length_unit: LengthUnit::Meters,
//!     wall_insulation_thickness_mm: 150.0,
//!     insulation_type: InsulationType::Polyurethane,
//!     ambient_temp: 35.0,
//!     room_temp: -18.0,
//!     temp_unit: TempUnit::Celsius,
//! };
//!
//! assert_eq!(room.volume_m3(), 60.0);
//! assert_eq!(room.temp_differential_c(), 53.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::insulation::InsulationType;
use crate::units::{Celsius, Fahrenheit, Feet, Meters};

/// Temperature unit selector for user-entered values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TempUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TempUnit {
    /// Display symbol ("°C" / "°F")
    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    /// Convert a value entered in this unit to Celsius
    pub fn to_celsius(&self, value: f64) -> Celsius {
        match self {
            TempUnit::Celsius => Celsius(value),
            TempUnit::Fahrenheit => Fahrenheit(value).into(),
        }
    }
}

/// Length unit selector for user-entered dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Meters
    #[default]
    Meters,
    /// Feet
    Feet,
}

impl LengthUnit {
    /// Display symbol ("m" / "ft")
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
        }
    }

    /// Convert a value entered in this unit to meters
    pub fn to_meters(&self, value: f64) -> Meters {
        match self {
            LengthUnit::Meters => Meters(value),
            LengthUnit::Feet => Feet(value).into(),
        }
    }
}

// ============================================================================
// Room
// ============================================================================

/// Freezer-room envelope and temperature parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 5.0,
///   "width": 4.0,
///   "height": 3.0,
///   "length_unit": "Meters",
///   "wall_insulation_thickness_mm": 150.0,
///   "insulation_type": "Polyurethane",
///   "ambient_temp": 35.0,
///   "room_temp": -18.0,
///   "temp_unit": "Celsius"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomParameters {
    /// Internal room length
    pub length: f64,

    /// Internal room width
    pub width: f64,

    /// Internal room height
    pub height: f64,

    /// Unit the three dimensions are entered in
    pub length_unit: LengthUnit,

    /// Panel insulation thickness in millimeters (walls, ceiling, floor)
    pub wall_insulation_thickness_mm: f64,

    /// Panel insulation material
    pub insulation_type: InsulationType,

    /// Ambient (outside) temperature, in `temp_unit`
    pub ambient_temp: f64,

    /// Room (setpoint) temperature, in `temp_unit`
    pub room_temp: f64,

    /// Unit the two temperatures are entered in
    pub temp_unit: TempUnit,
}

impl RoomParameters {
    /// Room length in meters
    pub fn length_m(&self) -> f64 {
        self.length_unit.to_meters(self.length).0
    }

    /// Room width in meters
    pub fn width_m(&self) -> f64 {
        self.length_unit.to_meters(self.width).0
    }

    /// Room height in meters
    pub fn height_m(&self) -> f64 {
        self.length_unit.to_meters(self.height).0
    }

    /// Internal volume in m³
    pub fn volume_m3(&self) -> f64 {
        self.length_m() * self.width_m() * self.height_m()
    }

    /// Combined area of the four walls in m²
    pub fn wall_area_m2(&self) -> f64 {
        2.0 * (self.length_m() + self.width_m()) * self.height_m()
    }

    /// Ceiling area in m²
    pub fn ceiling_area_m2(&self) -> f64 {
        self.length_m() * self.width_m()
    }

    /// Floor area in m²
    pub fn floor_area_m2(&self) -> f64 {
        self.length_m() * self.width_m()
    }

    /// Ambient temperature in °C
    pub fn ambient_temp_c(&self) -> f64 {
        self.temp_unit.to_celsius(self.ambient_temp).0
    }

    /// Room temperature in °C
    pub fn room_temp_c(&self) -> f64 {
        self.temp_unit.to_celsius(self.room_temp).0
    }

    /// Ambient minus room temperature, in Kelvin (== °C differential)
    pub fn temp_differential_c(&self) -> f64 {
        self.ambient_temp_c() - self.room_temp_c()
    }

    /// Envelope U-value in W/(m²·K) from the insulation type and thickness
    pub fn u_value_w_m2k(&self) -> f64 {
        self.insulation_type
            .u_value_w_m2k(self.wall_insulation_thickness_mm)
    }

    /// Advisory validation: positive dimensions and thickness.
    ///
    /// Not called by the aggregator.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            (
                "wall_insulation_thickness_mm",
                self.wall_insulation_thickness_mm,
            ),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be positive",
                ));
            }
        }
        Ok(())
    }
}

impl Default for RoomParameters {
    fn default() -> Self {
        RoomParameters {
            length: 5.0,
            width: 4.0,
            height: 3.0,
            length_unit: LengthUnit::Meters,
            wall_insulation_thickness_mm: 150.0,
            insulation_type: InsulationType::Polyurethane,
            ambient_temp: 35.0,
            room_temp: -18.0,
            temp_unit: TempUnit::Celsius,
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// Product thermal properties for the three-stage freezing model.
///
/// The physically meaningful ordering is entering ≥ freezing ≥ final;
/// `validate()` checks it, the aggregator does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductParameters {
    /// Product temperature when loaded into the room, in `temp_unit`
    pub product_entering_temp: f64,

    /// Target product temperature, in `temp_unit`
    pub product_final_temp: f64,

    /// Freezing point of the product, in `temp_unit`
    pub freezing_temp: f64,

    /// Specific heat above freezing in kJ/(kg·K)
    pub cp_above_freezing: f64,

    /// Specific heat below freezing in kJ/(kg·K)
    pub cp_below_freezing: f64,

    /// Latent heat of freezing in kJ/kg
    pub latent_heat: f64,

    /// Unit the three temperatures are entered in
    pub temp_unit: TempUnit,
}

impl ProductParameters {
    /// Entering temperature in °C
    pub fn entering_temp_c(&self) -> f64 {
        self.temp_unit.to_celsius(self.product_entering_temp).0
    }

    /// Final temperature in °C
    pub fn final_temp_c(&self) -> f64 {
        self.temp_unit.to_celsius(self.product_final_temp).0
    }

    /// Freezing temperature in °C
    pub fn freezing_temp_c(&self) -> f64 {
        self.temp_unit.to_celsius(self.freezing_temp).0
    }

    /// Advisory validation: entering ≥ freezing ≥ final.
    ///
    /// Not called by the aggregator.
    pub fn validate(&self) -> CalcResult<()> {
        if self.entering_temp_c() < self.freezing_temp_c() {
            return Err(CalcError::invalid_input(
                "product_entering_temp",
                self.product_entering_temp.to_string(),
                "Entering temperature is below the freezing point",
            ));
        }
        if self.freezing_temp_c() < self.final_temp_c() {
            return Err(CalcError::invalid_input(
                "product_final_temp",
                self.product_final_temp.to_string(),
                "Final temperature is above the freezing point",
            ));
        }
        Ok(())
    }
}

impl Default for ProductParameters {
    fn default() -> Self {
        // Generic frozen-food figures
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
}

// ============================================================================
// Miscellaneous
// ============================================================================

/// Occupancy, lighting, motor, and product-quantity inputs.
///
/// Every field is optional; the UI leaves them blank until the user fills
/// them in. [`MiscParameters::resolved`] is the single default-if-absent
/// policy point used by the aggregator and the report builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiscParameters {
    /// Number of workers inside the room
    pub occupancy_count: Option<f64>,

    /// Total rated fan/motor power in watts
    pub fan_motor_rating: Option<f64>,

    /// Total rated lighting power in watts
    pub light_power: Option<f64>,

    /// Hours per day the fans/lights/equipment run
    pub equipment_usage_hours: Option<f64>,

    /// Daily product loading in kilograms
    pub capacity_required: Option<f64>,
}

/// Default equipment run time when the user leaves the field blank (hours)
pub const DEFAULT_USAGE_HOURS: f64 = 20.0;

/// Misc parameters with the default-if-absent policy applied.
///
/// Produced once by [`MiscParameters::resolved`]; everything downstream sees
/// plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMisc {
    pub occupancy_count: f64,
    pub fan_motor_rating_w: f64,
    pub light_power_w: f64,
    pub equipment_usage_hours: f64,
    pub capacity_required_kg: f64,
}

impl MiscParameters {
    /// Apply the default-if-absent policy: zeros everywhere except equipment
    /// usage hours, which fall back to [`DEFAULT_USAGE_HOURS`].
    pub fn resolved(&self) -> ResolvedMisc {
        ResolvedMisc {
            occupancy_count: self.occupancy_count.unwrap_or(0.0),
            fan_motor_rating_w: self.fan_motor_rating.unwrap_or(0.0),
            light_power_w: self.light_power.unwrap_or(0.0),
            equipment_usage_hours: self.equipment_usage_hours.unwrap_or(DEFAULT_USAGE_HOURS),
            capacity_required_kg: self.capacity_required.unwrap_or(0.0),
        }
    }
}
