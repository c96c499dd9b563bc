use super::date::Date;
use super::vehicle::VehicleType;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RentalError {
    #[error("invalid date: {day:02}/{month:02}/{year:04}")]
    InvalidDate { day: u32, month: u32, year: i32 },
    #[error("malformed date '{0}', expected DD/MM/YYYY")]
    MalformedDate(String),
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: VehicleType,
        found: VehicleType,
    },
    #[error("vehicle is not available for rental: {0}")]
    VehicleUnavailable(String),
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: Date, end: Date },
    #[error("rental already completed: {0}")]
    AlreadyCompleted(String),
}
