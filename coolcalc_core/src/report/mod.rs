//! # Report Document Model
//!
//! A generic "title + sections of labeled values" document, built fresh for
//! every export request and rendered to HTML by [`html::render_html`]. No
//! persisted identity: the document is reconstructed from current inputs and
//! results each time.
//!
//! # Overview
//!
//! - [`ReportRow`] - one "label: value unit" line, optionally highlighted
//! - [`ReportSection`] - an ordered list of rows under a heading
//! - [`ReportDocument`] - title, subtitle, input sections, result sections
//!
//! # Example
//!
//! ```rust
//! use coolcalc_core::report::{ReportDocument, ReportSection, ReportRow};
//!
//! let doc = ReportDocument::new("Freezer Room Heat Load Summary", "Key results")
//!     .with_result_section(
//!         ReportSection::new("Main Results")
//!             .with_row(ReportRow::new("Design Load", "4.52", "kW").highlighted()),
//!     );
//!
//! assert_eq!(doc.headline().unwrap().label, "Design Load");
//! ```

pub mod export;
pub mod html;

use serde::{Deserialize, Serialize};

use crate::heatload::{HeatLoadResult, COOLING_DURATION_HR, SAFETY_FACTOR};
use crate::params::{MiscParameters, ProductParameters, RoomParameters};

/// One labeled value in a report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Row label (e.g., "Room Temperature")
    pub label: String,
    /// Pre-formatted value text
    pub value: String,
    /// Unit suffix (may be empty)
    pub unit: String,
    /// Whether the row is visually emphasized in the rendered report
    pub highlighted: bool,
}

impl ReportRow {
    /// Create a plain row
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        ReportRow {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
            highlighted: false,
        }
    }

    /// Mark this row as highlighted (builder pattern)
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

/// An ordered block of rows under a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section heading
    pub title: String,
    /// Rows in display order
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    /// Create an empty section with a heading
    pub fn new(title: impl Into<String>) -> Self {
        ReportSection {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row (builder pattern)
    pub fn with_row(mut self, row: ReportRow) -> Self {
        self.rows.push(row);
        self
    }
}

/// A complete report document: title, subtitle, and ordered input/result
/// sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Main document title
    pub title: String,
    /// Subtitle shown under the title
    pub subtitle: String,
    /// Input parameter sections, in display order
    pub inputs: Vec<ReportSection>,
    /// Result sections, in display order
    pub results: Vec<ReportSection>,
}

impl ReportDocument {
    /// Create an empty document
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        ReportDocument {
            title: title.into(),
            subtitle: subtitle.into(),
            inputs: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Append an input section (builder pattern)
    pub fn with_input_section(mut self, section: ReportSection) -> Self {
        self.inputs.push(section);
        self
    }

    /// Append a result section (builder pattern)
    pub fn with_result_section(mut self, section: ReportSection) -> Self {
        self.results.push(section);
        self
    }

    /// The headline figure: the first highlighted row across the result
    /// sections, in encounter order.
    ///
    /// Purely cosmetic context for the rendered header. When several rows
    /// are highlighted the choice depends on section and row ordering.
    pub fn headline(&self) -> Option<&ReportRow> {
        self.results
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.highlighted)
    }

    /// Build the freezer heat-load summary document from the current inputs
    /// and result record.
    ///
    /// Display defaults for optional miscellaneous fields are applied here,
    /// through the same policy the aggregator uses.
    pub fn freezer_summary(
        room: &RoomParameters,
        product: &ProductParameters,
        misc: &MiscParameters,
        result: &HeatLoadResult,
    ) -> Self {
        let resolved = misc.resolved();
        let temp = room.temp_unit.symbol();
        let product_temp = product.temp_unit.symbol();
        let length = room.length_unit.symbol();

        let ambient = ReportSection::new("Ambient Conditions")
            .with_row(ReportRow::new(
                "Ambient Temperature",
                fmt(room.ambient_temp, 1),
                temp,
            ))
            .with_row(ReportRow::new("Ambient RH", "60", "%"));

        let room_section = ReportSection::new("Room Definition")
            .with_row(ReportRow::new("Room Length", fmt(room.length, 2), length))
            .with_row(ReportRow::new("Room Width", fmt(room.width, 2), length))
            .with_row(ReportRow::new("Room Height", fmt(room.height, 2), length))
            .with_row(ReportRow::new(
                "Insulation Thickness",
                fmt(room.wall_insulation_thickness_mm, 0),
                "mm",
            ))
            .with_row(ReportRow::new(
                "Room Internal Volume",
                fmt(room.volume_m3(), 2),
                "m³",
            ))
            .with_row(ReportRow::new(
                "Room Temperature",
                fmt(room.room_temp, 1),
                temp,
            ))
            .with_row(ReportRow::new(
                "Insulation",
                room.insulation_type.display_name(),
                format!("{:.0} kg/m³", room.insulation_type.density_kg_m3()),
            ));

        let product_section = ReportSection::new("Product Definition")
            .with_row(ReportRow::new(
                "Product Quantity",
                fmt(resolved.capacity_required_kg, 0),
                "kg",
            ))
            .with_row(ReportRow::new(
                "Product Incoming Temp",
                fmt(product.product_entering_temp, 1),
                product_temp,
            ))
            .with_row(ReportRow::new(
                "Product Final Temp",
                fmt(product.product_final_temp, 1),
                product_temp,
            ))
            .with_row(ReportRow::new(
                "Freezing Temp",
                fmt(product.freezing_temp, 1),
                product_temp,
            ))
            .with_row(ReportRow::new(
                "Specific Heat Above Freezing",
                fmt(product.cp_above_freezing, 2),
                "kJ/kg·K",
            ))
            .with_row(ReportRow::new(
                "Specific Heat Below Freezing",
                fmt(product.cp_below_freezing, 2),
                "kJ/kg·K",
            ))
            .with_row(ReportRow::new(
                "Latent Heat of Freezing",
                fmt(product.latent_heat, 1),
                "kJ/kg",
            ));

        let internal_section = ReportSection::new("Internal Factors")
            .with_row(ReportRow::new(
                "No. of Workers",
                fmt(resolved.occupancy_count, 0),
                "",
            ))
            .with_row(ReportRow::new(
                "Rated Power of Motors",
                fmt(resolved.fan_motor_rating_w, 0),
                "W",
            ))
            .with_row(ReportRow::new(
                "Lightings",
                fmt(resolved.light_power_w, 0),
                "W",
            ))
            .with_row(ReportRow::new(
                "Operating Time",
                fmt(resolved.equipment_usage_hours, 0),
                "h",
            ));

        let main_results = ReportSection::new("Main Results")
            .with_row(
                ReportRow::new(
                    "Total Load (with 20% Safety)",
                    fmt(result.design_load_kw, 2),
                    "kW",
                )
                .highlighted(),
            )
            .with_row(
                ReportRow::new(
                    "Refrigeration Capacity (with 20% Safety)",
                    fmt(result.design_capacity_tr, 2),
                    "TR",
                )
                .highlighted(),
            )
            .with_row(
                ReportRow::new(
                    "Base Load (without safety)",
                    fmt(result.total_load_kw, 2),
                    "kW",
                )
                .highlighted(),
            )
            .with_row(
                ReportRow::new(
                    "Base Refrigeration Capacity",
                    fmt(result.total_load_tr, 2),
                    "TR",
                )
                .highlighted(),
            );

        let breakdown = ReportSection::new("Heat Load Results")
            .with_row(ReportRow::new(
                "Transmission Load in 24h",
                fmt(result.total_transmission_kw, 2),
                "kW",
            ))
            .with_row(ReportRow::new(
                "Product Load in 24h",
                fmt(result.total_product_kw, 2),
                "kW",
            ))
            .with_row(ReportRow::new(
                "Infiltration Load in 24h",
                fmt(result.air_change_kw, 2),
                "kW",
            ))
            .with_row(ReportRow::new(
                "Internal Load in 24h",
                fmt(result.total_misc_kw, 2),
                "kW",
            ))
            .with_row(ReportRow::new(
                "Safety Factor",
                fmt((SAFETY_FACTOR - 1.0) * 100.0, 0),
                "%",
            ))
            .with_row(ReportRow::new(
                "Cooling Time",
                fmt(COOLING_DURATION_HR, 2),
                "h",
            ))
            .with_row(ReportRow::new(
                "Air Quantity Required",
                fmt(result.air_qty_required_cfm, 0),
                "CFM",
            ));

        ReportDocument::new(
            "Freezer Room Heat Load Summary",
            "Key calculation results for freezer room refrigeration system",
        )
        .with_input_section(ambient)
        .with_input_section(room_section)
        .with_input_section(product_section)
        .with_input_section(internal_section)
        .with_result_section(main_results)
        .with_result_section(breakdown)
    }
}

/// Format a numeric value with the given precision for display
fn fmt(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatload::calculate_freezer_heat_load;

    fn sample_document() -> ReportDocument {
        let room = RoomParameters::default();
        let product = ProductParameters::default();
        let misc = MiscParameters {
            capacity_required: Some(1000.0),
            ..MiscParameters::default()
        };
        let result = calculate_freezer_heat_load(&room, &product, &misc);
        ReportDocument::freezer_summary(&room, &product, &misc, &result)
    }

    #[test]
    fn test_headline_is_first_highlighted_result_row() {
        let doc = sample_document();
        let headline = doc.headline().unwrap();
        assert_eq!(headline.label, "Total Load (with 20% Safety)");
        assert_eq!(headline.unit, "kW");
    }

    #[test]
    fn test_headline_none_without_highlights() {
        let doc = ReportDocument::new("Empty", "").with_result_section(
            ReportSection::new("Results").with_row(ReportRow::new("Plain", "1", "kW")),
        );
        assert!(doc.headline().is_none());
    }

    #[test]
    fn test_headline_ignores_input_sections() {
        let doc = ReportDocument::new("Doc", "")
            .with_input_section(
                ReportSection::new("Inputs")
                    .with_row(ReportRow::new("Input", "1", "m").highlighted()),
            )
            .with_result_section(
                ReportSection::new("Results")
                    .with_row(ReportRow::new("Result", "2", "kW").highlighted()),
            );
        assert_eq!(doc.headline().unwrap().label, "Result");
    }

    #[test]
    fn test_freezer_summary_section_order() {
        let doc = sample_document();
        let input_titles: Vec<_> = doc.inputs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            input_titles,
            vec![
                "Ambient Conditions",
                "Room Definition",
                "Product Definition",
                "Internal Factors"
            ]
        );
        assert_eq!(doc.results.len(), 2);
    }

    #[test]
    fn test_optional_misc_displayed_as_zero() {
        let doc = sample_document();
        let internal = doc
            .inputs
            .iter()
            .find(|s| s.title == "Internal Factors")
            .unwrap();
        let workers = internal
            .rows
            .iter()
            .find(|r| r.label == "No. of Workers")
            .unwrap();
        assert_eq!(workers.value, "0");
    }

    #[test]
    fn test_document_serialization() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let roundtrip: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, roundtrip);
    }
}
