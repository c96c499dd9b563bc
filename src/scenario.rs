//! JSON scenario input: a fleet, its customers and the rentals to replay

use crate::core::{Customer, Date, Rental, RentalError, Vehicle, VehicleKind};
use crate::fleet::Fleet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("invalid scenario json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate customer id: {0}")]
    DuplicateCustomerId(String),
    #[error("duplicate rental id: {0}")]
    DuplicateRentalId(String),
    #[error("unknown customer: {rental} -> {customer}")]
    UnknownCustomer { rental: String, customer: String },
    #[error("unknown vehicle: {rental} -> {vehicle}")]
    UnknownVehicle { rental: String, vehicle: String },
    #[error("rental {id}: {source}")]
    Rental {
        id: String,
        #[source]
        source: RentalError,
    },
}

/// Input root for scenario JSON
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioInput {
    /// Fleet name (e.g., "AutoPlus")
    pub name: String,
    #[serde(default)]
    pub vehicles: Vec<VehicleInput>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Rentals, replayed in document order
    #[serde(default)]
    pub rentals: Vec<RentalInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VehicleInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(flatten)]
    pub kind: VehicleKind,
}

/// Identifies a fleet vehicle by brand, model and year
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VehicleRef {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl std::fmt::Display for VehicleRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RentalInput {
    pub id: String,
    /// Customer id
    pub customer: String,
    pub vehicle: VehicleRef,
    /// Start date (DD/MM/YYYY or YYYY-MM-DD)
    #[schemars(with = "String")]
    pub start: Date,
    /// Planned end date
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub end: Option<Date>,
    /// Date the vehicle was returned; completes the rental
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub returned: Option<Date>,
}

/// Fleet state after replaying every rental
#[derive(Debug)]
pub struct Scenario {
    pub fleet: Fleet,
    pub customers: Vec<Customer>,
    pub rentals: Vec<Rental>,
}

/// Read scenario input from JSON
pub fn read_scenario_json<R: Read>(reader: R) -> Result<ScenarioInput, ScenarioError> {
    let input = serde_json::from_reader(reader)?;
    Ok(input)
}

impl ScenarioInput {
    /// Build the fleet and replay rentals in order
    pub fn load(self) -> Result<Scenario, ScenarioError> {
        let mut fleet = Fleet::new(self.name);
        for v in self.vehicles {
            fleet.add_vehicle(Vehicle::new(v.brand, v.model, v.year, v.kind));
        }

        check_unique_customers(&self.customers)?;

        let mut rental_ids = HashSet::new();
        let mut rentals = Vec::with_capacity(self.rentals.len());
        for input in self.rentals {
            if !rental_ids.insert(input.id.clone()) {
                return Err(ScenarioError::DuplicateRentalId(input.id));
            }
            rentals.push(replay_rental(&fleet, &self.customers, input)?);
        }

        log::info!(
            "Loaded fleet {}: {} vehicles, {} customers, {} rentals",
            fleet.name(),
            fleet.len(),
            self.customers.len(),
            rentals.len()
        );

        Ok(Scenario {
            fleet,
            customers: self.customers,
            rentals,
        })
    }
}

fn check_unique_customers(customers: &[Customer]) -> Result<(), ScenarioError> {
    let mut ids = HashSet::new();
    for customer in customers {
        if !ids.insert(customer.id.as_str()) {
            return Err(ScenarioError::DuplicateCustomerId(customer.id.clone()));
        }
    }
    Ok(())
}

fn replay_rental(
    fleet: &Fleet,
    customers: &[Customer],
    input: RentalInput,
) -> Result<Rental, ScenarioError> {
    let RentalInput {
        id,
        customer,
        vehicle,
        start,
        end,
        returned,
    } = input;

    let Some(customer) = customers.iter().find(|c| c.id == customer) else {
        return Err(ScenarioError::UnknownCustomer {
            rental: id,
            customer,
        });
    };
    let Some(handle) = fleet.find(&vehicle.brand, &vehicle.model, vehicle.year) else {
        return Err(ScenarioError::UnknownVehicle {
            rental: id,
            vehicle: vehicle.to_string(),
        });
    };

    let mut rental = Rental::new(id.clone(), customer.clone(), handle, start, end)
        .map_err(|source| ScenarioError::Rental {
            id: id.clone(),
            source,
        })?;
    if let Some(returned) = returned {
        rental
            .complete(returned)
            .map_err(|source| ScenarioError::Rental { id, source })?;
    }
    Ok(rental)
}
