use super::customer::Customer;
use super::date::Date;
use super::error::RentalError;
use super::vehicle::SharedVehicle;
use rust_decimal::Decimal;
use std::fmt;

/// Lifecycle state of a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalStatus {
    /// Vehicle is out with the customer
    Active,
    /// Vehicle returned and price finalized
    Completed,
}

impl RentalStatus {
    pub fn display(&self) -> &'static str {
        match self {
            RentalStatus::Active => "Active",
            RentalStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A customer renting a vehicle over a date range.
///
/// An end date given up front is the planned end; the rental only becomes
/// [`RentalStatus::Completed`] through [`Rental::complete`], which also hands
/// the vehicle back to the fleet.
#[derive(Debug)]
pub struct Rental {
    id: String,
    customer: Customer,
    vehicle: SharedVehicle,
    start_date: Date,
    end_date: Option<Date>,
    price: Option<Decimal>,
    status: RentalStatus,
}

impl Rental {
    /// Start a rental, marking the vehicle as rented.
    ///
    /// Fails without touching the vehicle if it is already rented or if
    /// `end_date` is before `start_date`.
    pub fn new(
        id: impl Into<String>,
        customer: Customer,
        vehicle: SharedVehicle,
        start_date: Date,
        end_date: Option<Date>,
    ) -> Result<Self, RentalError> {
        if let Some(end) = end_date {
            check_range(start_date, end)?;
        }

        let rented = vehicle.borrow_mut().rent();
        if !rented {
            return Err(RentalError::VehicleUnavailable(vehicle.borrow().name()));
        }

        let id = id.into();
        log::debug!(
            "Rental {} START: customer={}, vehicle={}, start={}",
            id,
            customer.id,
            vehicle.borrow().name(),
            start_date
        );

        Ok(Rental {
            id,
            customer,
            vehicle,
            start_date,
            end_date,
            price: None,
            status: RentalStatus::Active,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = customer;
    }

    pub fn vehicle(&self) -> &SharedVehicle {
        &self.vehicle
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    pub fn status(&self) -> RentalStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == RentalStatus::Completed
    }

    pub fn set_start_date(&mut self, start_date: Date) -> Result<(), RentalError> {
        if let Some(end) = self.end_date {
            check_range(start_date, end)?;
        }
        self.start_date = start_date;
        self.price = None;
        Ok(())
    }

    pub fn set_end_date(&mut self, end_date: Option<Date>) -> Result<(), RentalError> {
        if let Some(end) = end_date {
            check_range(self.start_date, end)?;
        }
        self.end_date = end_date;
        self.price = None;
        Ok(())
    }

    /// Rental length in days, `None` while no end date is set
    pub fn duration(&self) -> Option<u64> {
        self.end_date.map(|end| self.start_date.difference(&end))
    }

    /// End the rental on `end_date`, return the vehicle and finalize the price
    pub fn complete(&mut self, end_date: Date) -> Result<Decimal, RentalError> {
        if self.is_completed() {
            return Err(RentalError::AlreadyCompleted(self.id.clone()));
        }
        self.set_end_date(Some(end_date))?;
        self.vehicle.borrow_mut().return_vehicle();
        self.status = RentalStatus::Completed;

        let price = self.bill(end_date);
        self.price = Some(price);
        log::debug!(
            "Rental {} COMPLETE: end={}, days={}, price={}",
            self.id,
            end_date,
            self.start_date.difference(&end_date),
            price
        );
        Ok(price)
    }

    /// Compute and cache the price, `None` while no end date is set
    pub fn compute_price(&mut self) -> Option<Decimal> {
        let end = self.end_date?;
        let price = self.bill(end);
        self.price = Some(price);
        Some(price)
    }

    /// Cached price, computed on first access once an end date is set
    pub fn price(&mut self) -> Option<Decimal> {
        match self.price {
            Some(price) => Some(price),
            None => self.compute_price(),
        }
    }

    /// Price for the range ending at `end`, billing at least one day
    fn bill(&self, end: Date) -> Decimal {
        let days = self.start_date.difference(&end).max(1);
        self.vehicle.borrow().compute_rental_price(days)
    }

    pub fn display(&self) -> String {
        let mut info = format!(
            "Rental #{}\nCustomer: {} {}\nVehicle: {}\nStart date: {}",
            self.id,
            self.customer.name,
            self.customer.id,
            self.vehicle.borrow().display_info(),
            self.start_date
        );

        match self.end_date {
            Some(end) => {
                let price = self.price.unwrap_or_else(|| self.bill(end));
                info.push_str(&format!("\nEnd date: {}", end));
                info.push_str(&format!(
                    "\nDuration: {} day(s)",
                    self.start_date.difference(&end)
                ));
                info.push_str(&format!("\nPrice: {:.2}", price));
            }
            None => info.push_str("\nIn progress"),
        }
        info
    }
}

impl fmt::Display for Rental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Reject a range whose end precedes its start.
///
/// Compares the signed day count; [`Date::difference`] is absolute and would
/// never report an inverted range.
fn check_range(start: Date, end: Date) -> Result<(), RentalError> {
    if start.signed_difference(&end) < 0 {
        return Err(RentalError::InvalidRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::Vehicle;
    use rust_decimal_macros::dec;

    fn date(day: u32, month: u32, year: i32) -> Date {
        Date::new(day, month, year).unwrap()
    }

    fn customer() -> Customer {
        Customer::new("CL001", "Moustapha")
    }

    fn car() -> SharedVehicle {
        Vehicle::car("Renault", "Clio", 2022, 4).shared()
    }

    #[test]
    fn new_marks_vehicle_rented() {
        let vehicle = car();
        let rental = Rental::new("LOC001", customer(), vehicle.clone(), date(15, 5, 2025), None)
            .unwrap();
        assert!(!vehicle.borrow().is_available());
        assert_eq!(rental.status(), RentalStatus::Active);
        assert_eq!(rental.duration(), None);
    }

    #[test]
    fn new_fails_on_unavailable_vehicle() {
        let vehicle = car();
        let _first =
            Rental::new("LOC001", customer(), vehicle.clone(), date(15, 5, 2025), None).unwrap();
        let second = Rental::new("LOC002", customer(), vehicle.clone(), date(16, 5, 2025), None);
        assert_eq!(
            second.unwrap_err(),
            RentalError::VehicleUnavailable("Renault Clio (2022)".to_string())
        );
        assert!(!vehicle.borrow().is_available());
    }

    #[test]
    fn new_with_inverted_range_leaves_vehicle_available() {
        let vehicle = car();
        let result = Rental::new(
            "LOC001",
            customer(),
            vehicle.clone(),
            date(20, 5, 2025),
            Some(date(15, 5, 2025)),
        );
        assert!(matches!(result, Err(RentalError::InvalidRange { .. })));
        assert!(vehicle.borrow().is_available());
    }

    #[test]
    fn complete_returns_vehicle_and_prices() {
        let vehicle = car();
        let mut rental =
            Rental::new("LOC001", customer(), vehicle.clone(), date(15, 5, 2025), None).unwrap();

        let price = rental.complete(date(20, 5, 2025)).unwrap();
        assert_eq!(price, dec!(250));
        assert!(vehicle.borrow().is_available());
        assert!(rental.is_completed());
        assert_eq!(rental.duration(), Some(5));
        assert_eq!(rental.price(), Some(dec!(250)));
    }

    #[test]
    fn complete_twice_is_rejected() {
        let vehicle = car();
        let mut rental =
            Rental::new("LOC001", customer(), vehicle.clone(), date(15, 5, 2025), None).unwrap();
        rental.complete(date(20, 5, 2025)).unwrap();

        // Someone else rents the returned vehicle
        let _other =
            Rental::new("LOC002", customer(), vehicle.clone(), date(21, 5, 2025), None).unwrap();

        assert_eq!(
            rental.complete(date(22, 5, 2025)),
            Err(RentalError::AlreadyCompleted("LOC001".to_string()))
        );
        assert!(!vehicle.borrow().is_available());
        assert_eq!(rental.end_date(), Some(date(20, 5, 2025)));
    }

    #[test]
    fn complete_before_start_fails_without_returning_vehicle() {
        let vehicle = car();
        let mut rental =
            Rental::new("LOC001", customer(), vehicle.clone(), date(15, 5, 2025), None).unwrap();
        assert!(rental.complete(date(10, 5, 2025)).is_err());
        assert!(!vehicle.borrow().is_available());
        assert_eq!(rental.status(), RentalStatus::Active);
        assert_eq!(rental.end_date(), None);
    }

    #[test]
    fn truck_price() {
        let truck = Vehicle::truck("Mercedes", "Sprinter", 2020, dec!(5.0)).shared();
        let mut rental = Rental::new(
            "LOC002",
            Customer::new("CL002", "Rokhaya"),
            truck,
            date(20, 5, 2025),
            Some(date(22, 5, 2025)),
        )
        .unwrap();
        assert_eq!(rental.price(), Some(dec!(260)));
    }

    #[test]
    fn zero_duration_bills_one_day() {
        let mut rental = Rental::new(
            "LOC001",
            customer(),
            car(),
            date(15, 5, 2025),
            Some(date(15, 5, 2025)),
        )
        .unwrap();
        assert_eq!(rental.duration(), Some(0));
        assert_eq!(rental.compute_price(), Some(dec!(50)));
    }

    #[test]
    fn price_is_none_without_end_date() {
        let mut rental =
            Rental::new("LOC001", customer(), car(), date(15, 5, 2025), None).unwrap();
        assert_eq!(rental.compute_price(), None);
        assert_eq!(rental.price(), None);
    }

    #[test]
    fn changing_dates_resets_cached_price() {
        let mut rental = Rental::new(
            "LOC001",
            customer(),
            car(),
            date(15, 5, 2025),
            Some(date(20, 5, 2025)),
        )
        .unwrap();
        assert_eq!(rental.price(), Some(dec!(250)));

        rental.set_end_date(Some(date(25, 5, 2025))).unwrap();
        assert_eq!(rental.price(), Some(dec!(500)));

        rental.set_start_date(date(24, 5, 2025)).unwrap();
        assert_eq!(rental.price(), Some(dec!(50)));

        rental.set_end_date(None).unwrap();
        assert_eq!(rental.price(), None);
    }

    #[test]
    fn set_start_date_after_end_is_rejected() {
        let mut rental = Rental::new(
            "LOC001",
            customer(),
            car(),
            date(15, 5, 2025),
            Some(date(20, 5, 2025)),
        )
        .unwrap();
        assert_eq!(
            rental.set_start_date(date(21, 5, 2025)),
            Err(RentalError::InvalidRange {
                start: date(21, 5, 2025),
                end: date(20, 5, 2025)
            })
        );
        assert_eq!(rental.start_date(), date(15, 5, 2025));
    }

    #[test]
    fn set_end_date_before_start_is_rejected() {
        let mut rental =
            Rental::new("LOC001", customer(), car(), date(15, 5, 2025), None).unwrap();
        assert!(rental.set_end_date(Some(date(14, 5, 2025))).is_err());
        assert_eq!(rental.end_date(), None);
    }

    #[test]
    fn reassign_id_and_customer() {
        let mut rental =
            Rental::new("LOC001", customer(), car(), date(15, 5, 2025), None).unwrap();
        rental.set_id("LOC010");
        rental.set_customer(Customer::new("CL002", "Rokhaya"));
        assert_eq!(rental.id(), "LOC010");
        assert_eq!(rental.customer().name, "Rokhaya");
        assert!(rental.display().starts_with("Rental #LOC010\nCustomer: Rokhaya CL002"));
    }

    #[test]
    fn display_in_progress() {
        let rental = Rental::new("LOC003", customer(), car(), date(25, 5, 2025), None).unwrap();
        assert_eq!(
            rental.display(),
            "Rental #LOC003\n\
             Customer: Moustapha CL001\n\
             Vehicle: Car Renault Clio (2022) - 4 doors - Not available\n\
             Start date: 25/05/2025\n\
             In progress"
        );
    }

    #[test]
    fn display_completed() {
        let mut rental = Rental::new(
            "LOC001",
            customer(),
            car(),
            date(15, 5, 2025),
            Some(date(20, 5, 2025)),
        )
        .unwrap();
        rental.complete(date(25, 5, 2025)).unwrap();
        let text = rental.to_string();
        assert!(text.contains("Vehicle: Car Renault Clio (2022) - 4 doors - Available"));
        assert!(text.contains("End date: 25/05/2025"));
        assert!(text.contains("Duration: 10 day(s)"));
        assert!(text.ends_with("Price: 500.00"));
    }
}
