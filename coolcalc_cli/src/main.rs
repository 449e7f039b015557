//! # CoolCalc CLI Application
//!
//! Interactive freezer heat-load calculator: prompts for room, product, and
//! miscellaneous inputs, prints the aggregated results, and exports the
//! summary report as HTML through the core's print/share services.

use std::io::{self, BufRead, Write};

use coolcalc_core::errors::CalcResult;
use coolcalc_core::heatload::calculate_freezer_heat_load;
use coolcalc_core::params::{MiscParameters, ProductParameters, RoomParameters};
use coolcalc_core::report::export::{
    export_and_share, AlertSink, FilePrinter, FileRef, ShareOptions, ShareService,
};
use coolcalc_core::report::ReportDocument;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Share service for the terminal: always available, "shares" by printing
/// the produced file location.
struct ConsoleShare;

impl ShareService for ConsoleShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, file: &FileRef, options: &ShareOptions) -> CalcResult<()> {
        println!(
            "Report ready: {} ({})",
            file.path.display(),
            options.mime_type
        );
        Ok(())
    }
}

struct ConsoleAlerts;

impl AlertSink for ConsoleAlerts {
    fn alert(&self, title: &str, message: &str) {
        eprintln!("[{}] {}", title, message);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("CoolCalc CLI - Freezer Heat Load Calculator");
    println!("===========================================");
    println!();

    let room = RoomParameters {
        length: prompt_f64("Room length (m) [5.0]: ", 5.0),
        width: prompt_f64("Room width (m) [4.0]: ", 4.0),
        height: prompt_f64("Room height (m) [3.0]: ", 3.0),
        wall_insulation_thickness_mm: prompt_f64("Insulation thickness (mm) [150]: ", 150.0),
        ambient_temp: prompt_f64("Ambient temperature (°C) [35]: ", 35.0),
        room_temp: prompt_f64("Room temperature (°C) [-18]: ", -18.0),
        ..RoomParameters::default()
    };

    let product = ProductParameters {
        product_entering_temp: prompt_f64("Product entering temp (°C) [25]: ", 25.0),
        product_final_temp: prompt_f64("Product final temp (°C) [-18]: ", -18.0),
        ..ProductParameters::default()
    };

    let misc = MiscParameters {
        occupancy_count: Some(prompt_f64("Number of workers [2]: ", 2.0)),
        fan_motor_rating: Some(prompt_f64("Fan motor rating (W) [1500]: ", 1500.0)),
        light_power: Some(prompt_f64("Lighting power (W) [400]: ", 400.0)),
        equipment_usage_hours: Some(prompt_f64("Equipment run time (h/day) [20]: ", 20.0)),
        capacity_required: Some(prompt_f64("Daily product loading (kg) [2000]: ", 2000.0)),
    };

    if let Err(e) = room.validate() {
        eprintln!("Warning: {}", e);
    }
    if let Err(e) = product.validate() {
        eprintln!("Warning: {}", e);
    }

    let result = calculate_freezer_heat_load(&room, &product, &misc);

    println!();
    println!("═══════════════════════════════════════");
    println!("  FREEZER HEAT LOAD RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Transmission Loads:");
    println!("  Walls:     {:.3} kW", result.wall_load_kw);
    println!("  Ceiling:   {:.3} kW", result.ceiling_load_kw);
    println!("  Floor:     {:.3} kW", result.floor_load_kw);
    println!("  Total:     {:.3} kW", result.total_transmission_kw);
    println!();
    println!("Product Loads (freezing process):");
    println!("  Before freezing: {:.3} kW", result.before_freezing_kw);
    println!("  Latent:          {:.3} kW", result.latent_freezing_kw);
    println!("  After freezing:  {:.3} kW", result.after_freezing_kw);
    println!("  Total:           {:.3} kW", result.total_product_kw);
    println!();
    println!("Other Loads:");
    println!("  Air change: {:.3} kW", result.air_change_kw);
    println!("  Equipment:  {:.3} kW", result.equipment_kw);
    println!("  Lighting:   {:.3} kW", result.light_kw);
    println!("  Occupancy:  {:.3} kW", result.occupancy_kw);
    println!("  Misc total: {:.3} kW", result.total_misc_kw);
    println!();
    println!("Heat Distribution:");
    println!("  Sensible: {:.3} kW", result.sensible_heat_kw);
    println!("  Latent:   {:.3} kW", result.latent_heat_kw);
    println!("  Air qty:  {:.0} CFM", result.air_qty_required_cfm);
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  BASE LOAD:   {:.2} kW ({:.2} TR)",
        result.total_load_kw, result.total_load_tr
    );
    println!(
        "  DESIGN LOAD: {:.2} kW ({:.2} TR, incl. 20% safety)",
        result.design_load_kw, result.design_capacity_tr
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    println!();
    let export = prompt_f64("Export HTML report? (1 = yes, 0 = no) [1]: ", 1.0);
    if export != 0.0 {
        let doc = ReportDocument::freezer_summary(&room, &product, &misc, &result);
        let printer = FilePrinter::new(".");
        export_and_share(&doc, &printer, &ConsoleShare, &ConsoleAlerts);
    }
}
