//! Vehicle fleet rental management: calendar dates, vehicle availability,
//! rental lifecycle and pricing.

pub mod core;
pub mod fleet;
pub mod scenario;
