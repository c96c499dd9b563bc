pub mod customer;
pub mod date;
pub mod error;
pub mod rental;
pub mod vehicle;

// Flat public surface for domain types and functions.
pub use customer::Customer;
pub use date::{days_in_month, is_leap_year, Date};
pub use error::RentalError;
pub use rental::{Rental, RentalStatus};
pub use vehicle::{SharedVehicle, Vehicle, VehicleKind, VehicleType};
