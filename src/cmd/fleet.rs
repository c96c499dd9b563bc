//! Fleet command - fleet overview after replaying rentals

use crate::cmd::{read_scenario, vehicle_rows, VehicleRow};
use clap::Args;
use fleetrent::core::VehicleType;
use fleetrent::fleet::Fleet;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FleetCommand {
    /// Scenario file (JSON). Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Fleet data for JSON output
#[derive(Debug, Serialize)]
struct FleetOutput {
    name: String,
    total: usize,
    cars: usize,
    trucks: usize,
    available: usize,
    rented: usize,
    vehicles: Vec<VehicleRow>,
}

impl FleetOutput {
    fn new(fleet: &Fleet) -> Self {
        FleetOutput {
            name: fleet.name().to_string(),
            total: fleet.len(),
            cars: fleet.count(None, Some(VehicleType::Car)),
            trucks: fleet.count(None, Some(VehicleType::Truck)),
            available: fleet.count(Some(true), None),
            rented: fleet.count(Some(false), None),
            vehicles: vehicle_rows(fleet.vehicles()),
        }
    }
}

impl FleetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let scenario = read_scenario(&self.file)?;

        if self.json {
            let output = FleetOutput::new(&scenario.fleet);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print!("{}", scenario.fleet.summary());
        }
        Ok(())
    }
}
