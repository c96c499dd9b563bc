//! Quote command - price a hypothetical rental

use crate::cmd::{format_money, VehicleTypeArg};
use clap::Args;
use fleetrent::core::{Customer, Date, Rental, Vehicle, VehicleKind};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct QuoteCommand {
    /// Vehicle type to price
    #[arg(short = 't', long, value_enum)]
    vehicle_type: VehicleTypeArg,

    /// Truck capacity in tons (required for trucks)
    #[arg(short, long)]
    capacity: Option<Decimal>,

    /// First day of the rental (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(short, long)]
    start: Date,

    /// Last day of the rental, defaults to the start date
    #[arg(short, long)]
    end: Option<Date>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct QuoteOutput {
    vehicle_type: String,
    start_date: String,
    end_date: String,
    days: u64,
    billed_days: u64,
    daily_rate: String,
    price: String,
}

impl QuoteCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let kind = match self.vehicle_type {
            VehicleTypeArg::Car => VehicleKind::Car { door_count: 4 },
            VehicleTypeArg::Truck => {
                let Some(capacity_tons) = self.capacity else {
                    anyhow::bail!("--capacity is required when quoting a truck");
                };
                VehicleKind::Truck { capacity_tons }
            }
        };
        let daily_rate = kind.daily_rate();
        let vehicle = Vehicle::new("Quote", "Quote", self.start.year(), kind).shared();

        let end = self.end.unwrap_or(self.start);
        let mut rental = Rental::new(
            "QUOTE",
            Customer::new("QUOTE", "Quote"),
            vehicle,
            self.start,
            Some(end),
        )?;
        let days = rental.duration().unwrap_or_default();
        let price = rental.price().unwrap_or_default();

        let output = QuoteOutput {
            vehicle_type: rental.vehicle().borrow().vehicle_type().to_string(),
            start_date: self.start.to_string(),
            end_date: end.to_string(),
            days,
            billed_days: days.max(1),
            daily_rate: format_money(daily_rate),
            price: format_money(price),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "{} from {} to {}: {} day(s) billed at {}/day = {}",
                output.vehicle_type,
                output.start_date,
                output.end_date,
                output.billed_days,
                output.daily_rate,
                output.price
            );
        }
        Ok(())
    }
}
