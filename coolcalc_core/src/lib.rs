//! # coolcalc_core - Freezer Heat Load Engine
//!
//! `coolcalc_core` is the computational heart of CoolCalc: a deterministic
//! freezer-room heat-load aggregator plus a report exporter that renders the
//! results into a self-contained HTML document for print-to-PDF and sharing.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input records and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Pluggable edges**: Platform print/share services live behind traits
//! - **Infallible core**: The aggregator has no error paths; validation is
//!   advisory and failures exist only on the export pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use coolcalc_core::heatload::calculate_freezer_heat_load;
//! use coolcalc_core::params::{RoomParameters, ProductParameters, MiscParameters};
//! use coolcalc_core::report::ReportDocument;
//!
//! let room = RoomParameters::default();
//! let product = ProductParameters::default();
//! let misc = MiscParameters::default();
//!
//! let result = calculate_freezer_heat_load(&room, &product, &misc);
//! println!("Design capacity: {:.2} TR", result.design_capacity_tr);
//!
//! let doc = ReportDocument::freezer_summary(&room, &product, &misc, &result);
//! let json = serde_json::to_string_pretty(&doc).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`params`] - Room/product/miscellaneous input records
//! - [`heatload`] - The heat-load aggregator and its component models
//! - [`insulation`] - Insulation material database
//! - [`report`] - Report document model, HTML rendering, export pipeline
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod heatload;
pub mod insulation;
pub mod params;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use heatload::{calculate_freezer_heat_load, HeatLoadResult};
pub use params::{MiscParameters, ProductParameters, RoomParameters};
pub use report::export::{export_and_share, AlertSink, FilePrinter, PrintService, ShareService};
pub use report::ReportDocument;
