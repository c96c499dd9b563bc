//! Search command - filter fleet vehicles

use crate::cmd::{print_table, read_scenario, vehicle_rows, VehicleRow, VehicleTypeArg};
use clap::Args;
use fleetrent::fleet::SearchCriteria;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Scenario file (JSON). Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Filter by brand (case-insensitive)
    #[arg(short, long)]
    brand: Option<String>,

    /// Filter by model (case-insensitive)
    #[arg(short, long)]
    model: Option<String>,

    /// Filter by model year
    #[arg(short, long)]
    year: Option<i32>,

    /// Only vehicles available for rental
    #[arg(long, conflicts_with = "rented")]
    available: bool,

    /// Only vehicles currently rented
    #[arg(long)]
    rented: bool,

    /// Filter by vehicle type
    #[arg(short = 't', long, value_enum)]
    vehicle_type: Option<VehicleTypeArg>,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

impl SearchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let scenario = read_scenario(&self.file)?;
        let found = scenario.fleet.search(&self.criteria());
        log::debug!("Search matched {} of {} vehicles", found.len(), scenario.fleet.len());
        let rows = vehicle_rows(&found);

        if self.csv {
            self.write_csv(&rows)
        } else if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        } else {
            if rows.is_empty() {
                println!("No vehicles found matching filters");
            } else {
                print_table(&rows);
            }
            Ok(())
        }
    }

    fn criteria(&self) -> SearchCriteria {
        let available = match (self.available, self.rented) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        SearchCriteria {
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            available,
            vehicle_type: self.vehicle_type.map(Into::into),
        }
    }

    fn write_csv(&self, rows: &[VehicleRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
