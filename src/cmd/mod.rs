pub mod dates;
pub mod demo;
pub mod fleet;
pub mod quote;
pub mod rentals;
pub mod schema;
pub mod search;

use anyhow::Context;
use fleetrent::core::{SharedVehicle, Vehicle, VehicleKind, VehicleType};
use fleetrent::scenario::{self, Scenario};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Read a scenario (JSON) and replay its rentals (or stdin with "-")
pub fn read_scenario(path: &Path) -> anyhow::Result<Scenario> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Scenario> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let input = scenario::read_scenario_json(reader)?;
    Ok(input.load()?)
}

fn read_from_stdin() -> anyhow::Result<Scenario> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let input = scenario::read_scenario_json(io::Cursor::new(buffer))?;
    Ok(input.load()?)
}

/// Vehicle type filter/selector for command arguments
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VehicleTypeArg {
    Car,
    Truck,
}

impl From<VehicleTypeArg> for VehicleType {
    fn from(arg: VehicleTypeArg) -> Self {
        match arg {
            VehicleTypeArg::Car => VehicleType::Car,
            VehicleTypeArg::Truck => VehicleType::Truck,
        }
    }
}

/// Row for vehicle tables, CSV and JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct VehicleRow {
    #[tabled(rename = "#")]
    pub row_num: usize,

    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    pub vehicle_type: String,

    #[tabled(rename = "Brand")]
    pub brand: String,

    #[tabled(rename = "Model")]
    pub model: String,

    #[tabled(rename = "Year")]
    pub year: i32,

    #[tabled(rename = "Details")]
    pub details: String,

    #[tabled(rename = "Daily Rate")]
    pub daily_rate: String,

    #[tabled(rename = "Status")]
    pub status: String,
}

impl VehicleRow {
    pub fn new(row_num: usize, vehicle: &Vehicle) -> Self {
        let details = match vehicle.kind() {
            VehicleKind::Car { door_count } => format!("{} doors", door_count),
            VehicleKind::Truck { capacity_tons } => format!("{} tons", capacity_tons),
        };
        VehicleRow {
            row_num,
            vehicle_type: vehicle.vehicle_type().to_string(),
            brand: vehicle.brand().to_string(),
            model: vehicle.model().to_string(),
            year: vehicle.year(),
            details,
            daily_rate: format_money(vehicle.kind().daily_rate()),
            status: vehicle.availability_label().to_string(),
        }
    }
}

pub fn vehicle_rows(vehicles: &[SharedVehicle]) -> Vec<VehicleRow> {
    vehicles
        .iter()
        .enumerate()
        .map(|(i, v)| VehicleRow::new(i + 1, &v.borrow()))
        .collect()
}

pub fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
