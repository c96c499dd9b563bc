use super::error::RentalError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Daily rate for a car
pub const CAR_DAILY_RATE: Decimal = dec!(50);
/// Base daily rate for a truck, before the capacity surcharge
pub const TRUCK_BASE_DAILY_RATE: Decimal = dec!(80);
/// Truck surcharge per tonne of capacity, per day
pub const TRUCK_RATE_PER_TON: Decimal = dec!(10);

/// Vehicle handle shared between the fleet and the rentals of that vehicle
pub type SharedVehicle = Rc<RefCell<Vehicle>>;

/// Kind of vehicle, without its kind-specific data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum VehicleType {
    Car,
    Truck,
}

impl VehicleType {
    pub fn display(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Kind-specific vehicle attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum VehicleKind {
    Car {
        door_count: u32,
    },
    Truck {
        #[schemars(with = "f64")]
        capacity_tons: Decimal,
    },
}

impl VehicleKind {
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            VehicleKind::Car { .. } => VehicleType::Car,
            VehicleKind::Truck { .. } => VehicleType::Truck,
        }
    }

    /// Price per rental day
    pub fn daily_rate(&self) -> Decimal {
        match self {
            VehicleKind::Car { .. } => CAR_DAILY_RATE,
            VehicleKind::Truck { capacity_tons } => {
                TRUCK_BASE_DAILY_RATE + TRUCK_RATE_PER_TON * *capacity_tons
            }
        }
    }
}

/// A rentable vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    brand: String,
    model: String,
    year: i32,
    available: bool,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        kind: VehicleKind,
    ) -> Self {
        Vehicle {
            brand: brand.into(),
            model: model.into(),
            year,
            available: true,
            kind,
        }
    }

    pub fn car(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        door_count: u32,
    ) -> Self {
        Vehicle::new(brand, model, year, VehicleKind::Car { door_count })
    }

    pub fn truck(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        capacity_tons: Decimal,
    ) -> Self {
        Vehicle::new(brand, model, year, VehicleKind::Truck { capacity_tons })
    }

    /// Wrap into a handle that can be shared with rentals
    pub fn shared(self) -> SharedVehicle {
        Rc::new(RefCell::new(self))
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.kind.vehicle_type()
    }

    pub fn door_count(&self) -> Result<u32, RentalError> {
        match &self.kind {
            VehicleKind::Car { door_count } => Ok(*door_count),
            other => Err(mismatch(VehicleType::Car, other)),
        }
    }

    pub fn set_door_count(&mut self, doors: u32) -> Result<(), RentalError> {
        match &mut self.kind {
            VehicleKind::Car { door_count } => {
                *door_count = doors;
                Ok(())
            }
            other => Err(mismatch(VehicleType::Car, other)),
        }
    }

    pub fn capacity_tons(&self) -> Result<Decimal, RentalError> {
        match &self.kind {
            VehicleKind::Truck { capacity_tons } => Ok(*capacity_tons),
            other => Err(mismatch(VehicleType::Truck, other)),
        }
    }

    pub fn set_capacity_tons(&mut self, capacity: Decimal) -> Result<(), RentalError> {
        match &mut self.kind {
            VehicleKind::Truck { capacity_tons } => {
                *capacity_tons = capacity;
                Ok(())
            }
            other => Err(mismatch(VehicleType::Truck, other)),
        }
    }

    /// Mark as rented. Returns false, leaving state unchanged, if already rented.
    pub fn rent(&mut self) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        log::debug!("Vehicle {} RENTED", self.name());
        true
    }

    /// Mark as available. Returns false, leaving state unchanged, if not rented.
    pub fn return_vehicle(&mut self) -> bool {
        if self.available {
            return false;
        }
        self.available = true;
        log::debug!("Vehicle {} RETURNED", self.name());
        true
    }

    /// Short identification, e.g. "Renault Clio (2022)"
    pub fn name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.year)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not available"
        }
    }

    pub fn display_info(&self) -> String {
        let details = match &self.kind {
            VehicleKind::Car { door_count } => format!("{} doors", door_count),
            VehicleKind::Truck { capacity_tons } => format!("Capacity: {} tons", capacity_tons),
        };
        format!(
            "{} {} - {} - {}",
            self.vehicle_type(),
            self.name(),
            details,
            self.availability_label()
        )
    }

    pub fn compute_rental_price(&self, days: u64) -> Decimal {
        self.kind.daily_rate() * Decimal::from(days)
    }
}

fn mismatch(expected: VehicleType, found: &VehicleKind) -> RentalError {
    RentalError::TypeMismatch {
        expected,
        found: found.vehicle_type(),
    }
}
