//! Schema command - print the expected scenario input format

use clap::Args;
use fleetrent::core::{Customer, Date, VehicleKind};
use fleetrent::scenario::{RentalInput, ScenarioInput, VehicleInput, VehicleRef};
use rust_decimal_macros::dec;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or example
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the scenario input
    JsonSchema,
    /// A small example scenario document
    Example,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Example => self.print_example(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ScenarioInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_example(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(&example()?)?);
        Ok(())
    }
}

fn example() -> anyhow::Result<ScenarioInput> {
    Ok(ScenarioInput {
        name: "AutoPlus".to_string(),
        vehicles: vec![
            VehicleInput {
                brand: "Renault".to_string(),
                model: "Clio".to_string(),
                year: 2022,
                kind: VehicleKind::Car { door_count: 4 },
            },
            VehicleInput {
                brand: "Mercedes".to_string(),
                model: "Sprinter".to_string(),
                year: 2020,
                kind: VehicleKind::Truck {
                    capacity_tons: dec!(5.0),
                },
            },
        ],
        customers: vec![Customer::new("CL001", "Moustapha")],
        rentals: vec![RentalInput {
            id: "LOC001".to_string(),
            customer: "CL001".to_string(),
            vehicle: VehicleRef {
                brand: "Mercedes".to_string(),
                model: "Sprinter".to_string(),
                year: 2020,
            },
            start: Date::new(20, 5, 2025)?,
            end: Some(Date::new(22, 5, 2025)?),
            returned: None,
        }],
    })
}
