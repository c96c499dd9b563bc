//! Rentals command - rental summaries after replay

use crate::cmd::{format_money, read_scenario};
use clap::{Args, ValueEnum};
use fleetrent::core::{Rental, RentalStatus};
use fleetrent::fleet::eq_ignore_case;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RentalsCommand {
    /// Scenario file (JSON). Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Filter by rental status
    #[arg(short, long, value_enum)]
    status: Option<StatusFilter>,

    /// Filter by customer id
    #[arg(short, long)]
    customer: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Active,
    Completed,
}

impl StatusFilter {
    fn matches(self, status: RentalStatus) -> bool {
        matches!(
            (self, status),
            (StatusFilter::Active, RentalStatus::Active)
                | (StatusFilter::Completed, RentalStatus::Completed)
        )
    }
}

/// Rental data for JSON output
#[derive(Debug, Serialize)]
struct RentalView {
    id: String,
    customer_id: String,
    customer_name: String,
    vehicle: String,
    status: String,
    start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_days: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
}

impl RentalView {
    fn new(rental: &mut Rental) -> Self {
        let price = rental.price().map(format_money);
        let vehicle = rental.vehicle().borrow().name();
        RentalView {
            id: rental.id().to_string(),
            customer_id: rental.customer().id.clone(),
            customer_name: rental.customer().name.clone(),
            vehicle,
            status: rental.status().to_string(),
            start_date: rental.start_date().to_string(),
            end_date: rental.end_date().map(|d| d.to_string()),
            duration_days: rental.duration(),
            price,
        }
    }
}

impl RentalsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut scenario = read_scenario(&self.file)?;

        let mut rentals: Vec<&mut Rental> = scenario
            .rentals
            .iter_mut()
            .filter(|r| self.status.is_none_or(|s| s.matches(r.status())))
            .filter(|r| {
                self.customer
                    .as_deref()
                    .is_none_or(|c| eq_ignore_case(&r.customer().id, c))
            })
            .collect();

        if self.json {
            let views: Vec<RentalView> = rentals.iter_mut().map(|r| RentalView::new(r)).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }

        if rentals.is_empty() {
            println!("No rentals found matching filters");
            return Ok(());
        }

        for (i, rental) in rentals.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", rental.display());
        }
        Ok(())
    }
}
