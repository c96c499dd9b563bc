//! Demo command - walk through a fleet, its customers and a few rentals

use crate::cmd::format_money;
use clap::Args;
use fleetrent::core::{Customer, Date, Rental, Vehicle, VehicleType};
use fleetrent::fleet::{Fleet, SearchCriteria};
use rust_decimal_macros::dec;

#[derive(Args, Debug)]
pub struct DemoCommand {
    /// Name of the demo fleet
    #[arg(short, long, default_value = "AutoPlus")]
    name: String,
}

impl DemoCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        section("VEHICLES");
        let mut fleet = Fleet::new(self.name.as_str());
        let vehicles = [
            Vehicle::car("Renault", "Clio", 2022, 4),
            Vehicle::car("Peugeot", "308", 2021, 5),
            Vehicle::car("Citroën", "C3", 2023, 3),
            Vehicle::car("Ford", "Fiesta", 2020, 4),
            Vehicle::truck("Renault", "Master", 2021, dec!(3.5)),
            Vehicle::truck("Iveco", "Daily", 2022, dec!(7.2)),
            Vehicle::truck("Mercedes", "Sprinter", 2020, dec!(5.0)),
        ];
        for vehicle in vehicles {
            println!("{}", vehicle.display_info());
            fleet.add_vehicle(vehicle);
        }

        section("FLEET");
        print!("{}", fleet.summary());

        section("CUSTOMERS");
        let customers = [
            Customer::new("CL001", "Moustapha"),
            Customer::new("CL002", "Rokhaya"),
            Customer::new("CL003", "Ahmady"),
        ];
        for customer in &customers {
            println!("{}", customer.info());
        }

        section("DATES");
        let d1 = Date::new(15, 5, 2025)?;
        let d2 = Date::new(20, 5, 2025)?;
        let d3 = Date::new(25, 5, 2025)?;
        let d4 = Date::new(1, 6, 2025)?;
        for other in [d2, d3, d4] {
            println!("{} -> {}: {} day(s)", d1, other, d1.difference(&other));
        }

        section("RENTALS");
        let vehicle = |brand: &str, model: &str, year: i32| {
            fleet
                .find(brand, model, year)
                .ok_or_else(|| anyhow::anyhow!("{} {} ({}) not in fleet", brand, model, year))
        };
        let mut loc001 = Rental::new(
            "LOC001",
            customers[0].clone(),
            vehicle("Renault", "Clio", 2022)?,
            d1,
            Some(d2),
        )?;
        let loc002 = Rental::new(
            "LOC002",
            customers[1].clone(),
            vehicle("Renault", "Master", 2021)?,
            d2,
            Some(d3),
        )?;
        let loc003 = Rental::new(
            "LOC003",
            customers[2].clone(),
            vehicle("Citroën", "C3", 2023)?,
            d3,
            None,
        )?;
        for rental in [&loc001, &loc002, &loc003] {
            println!("{}\n", rental);
        }

        section("AVAILABLE VEHICLES");
        for (i, v) in fleet.available_vehicles().iter().enumerate() {
            println!("{}. {}", i + 1, v.borrow().display_info());
        }

        section("SEARCH");
        println!("Renault vehicles:");
        let renault = SearchCriteria {
            brand: Some("renault".to_string()),
            ..Default::default()
        };
        for v in fleet.search(&renault) {
            println!("  {}", v.borrow().display_info());
        }
        println!("Available cars:");
        let available_cars = SearchCriteria {
            available: Some(true),
            vehicle_type: Some(VehicleType::Car),
            ..Default::default()
        };
        for v in fleet.search(&available_cars) {
            println!("  {}", v.borrow().display_info());
        }

        section("RETURN");
        let price = loc001.complete(d3)?;
        println!("Rental {} completed on {}: {}", loc001.id(), d3, format_money(price));
        println!("{}", loc001);

        section("FINAL FLEET");
        print!("{}", fleet.summary());
        Ok(())
    }
}

fn section(title: &str) {
    println!();
    println!("===== {} =====", title);
}
