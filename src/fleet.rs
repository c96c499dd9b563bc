//! Fleet registry - owns the vehicles available for rental

use crate::core::{SharedVehicle, Vehicle, VehicleType};
use std::rc::Rc;

/// Search filters; unset fields match every vehicle
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Case-insensitive brand
    pub brand: Option<String>,
    /// Case-insensitive model
    pub model: Option<String>,
    pub year: Option<i32>,
    pub available: Option<bool>,
    pub vehicle_type: Option<VehicleType>,
}

impl SearchCriteria {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.brand
            .as_deref()
            .is_none_or(|b| eq_ignore_case(vehicle.brand(), b))
            && self
                .model
                .as_deref()
                .is_none_or(|m| eq_ignore_case(vehicle.model(), m))
            && self.year.is_none_or(|y| vehicle.year() == y)
            && self.available.is_none_or(|a| vehicle.is_available() == a)
            && self.vehicle_type.is_none_or(|t| vehicle.vehicle_type() == t)
    }
}

/// Unicode case-insensitive comparison, so "CITROËN" matches "Citroën"
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Named collection of vehicles, kept in insertion order
#[derive(Debug, Clone)]
pub struct Fleet {
    name: String,
    vehicles: Vec<SharedVehicle>,
}

impl Fleet {
    pub fn new(name: impl Into<String>) -> Self {
        Fleet {
            name: name.into(),
            vehicles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn vehicles(&self) -> &[SharedVehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Add a vehicle and return its shared handle.
    ///
    /// Returns `None` if a vehicle with the same brand, model and year is
    /// already registered.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Option<SharedVehicle> {
        if self
            .find(vehicle.brand(), vehicle.model(), vehicle.year())
            .is_some()
        {
            log::warn!("Fleet {}: {} already registered, skipping", self.name, vehicle.name());
            return None;
        }
        log::debug!("Fleet {} ADD: {}", self.name, vehicle.name());
        let handle = vehicle.shared();
        self.vehicles.push(Rc::clone(&handle));
        Some(handle)
    }

    /// Remove the vehicle behind `handle`. Returns false if it is not in the fleet.
    pub fn remove_vehicle(&mut self, handle: &SharedVehicle) -> bool {
        match self.vehicles.iter().position(|v| Rc::ptr_eq(v, handle)) {
            Some(index) => {
                let removed = self.vehicles.remove(index);
                log::debug!("Fleet {} REMOVE: {}", self.name, removed.borrow().name());
                true
            }
            None => false,
        }
    }

    /// Exact brand/model/year lookup
    pub fn find(&self, brand: &str, model: &str, year: i32) -> Option<SharedVehicle> {
        self.vehicles
            .iter()
            .find(|v| {
                let v = v.borrow();
                v.brand() == brand && v.model() == model && v.year() == year
            })
            .cloned()
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<SharedVehicle> {
        self.vehicles
            .iter()
            .filter(|v| criteria.matches(&v.borrow()))
            .cloned()
            .collect()
    }

    pub fn available_vehicles(&self) -> Vec<SharedVehicle> {
        self.search(&SearchCriteria {
            available: Some(true),
            ..Default::default()
        })
    }

    pub fn count(&self, available: Option<bool>, vehicle_type: Option<VehicleType>) -> usize {
        let criteria = SearchCriteria {
            available,
            vehicle_type,
            ..Default::default()
        };
        self.vehicles
            .iter()
            .filter(|v| criteria.matches(&v.borrow()))
            .count()
    }

    /// Multi-line overview: counts by type and availability, then every vehicle
    pub fn summary(&self) -> String {
        let mut info = format!("Fleet: {}\n", self.name);
        info.push_str(&format!("Total vehicles: {}\n", self.len()));
        info.push_str(&format!(
            "Cars: {}, Trucks: {}\n",
            self.count(None, Some(VehicleType::Car)),
            self.count(None, Some(VehicleType::Truck))
        ));
        info.push_str(&format!(
            "Available: {}, Rented: {}\n\n",
            self.count(Some(true), None),
            self.count(Some(false), None)
        ));

        if !self.is_empty() {
            info.push_str("Vehicles:\n");
            for (i, vehicle) in self.vehicles.iter().enumerate() {
                info.push_str(&format!("{}. {}\n", i + 1, vehicle.borrow().display_info()));
            }
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn autoplus() -> Fleet {
        let mut fleet = Fleet::new("AutoPlus");
        fleet.add_vehicle(Vehicle::car("Renault", "Clio", 2022, 4));
        fleet.add_vehicle(Vehicle::car("Peugeot", "308", 2021, 5));
        fleet.add_vehicle(Vehicle::truck("Renault", "Master", 2021, dec!(3.5)));
        fleet.add_vehicle(Vehicle::truck("Iveco", "Daily", 2022, dec!(7.2)));
        fleet
    }

    fn names(vehicles: &[SharedVehicle]) -> Vec<String> {
        vehicles.iter().map(|v| v.borrow().name()).collect()
    }

    #[test]
    fn search_without_criteria_returns_all_in_order() {
        let fleet = autoplus();
        let all = fleet.search(&SearchCriteria::default());
        assert_eq!(
            names(&all),
            vec![
                "Renault Clio (2022)",
                "Peugeot 308 (2021)",
                "Renault Master (2021)",
                "Iveco Daily (2022)"
            ]
        );
    }

    #[test]
    fn search_by_brand_is_case_insensitive() {
        let fleet = autoplus();
        let found = fleet.search(&SearchCriteria {
            brand: Some("renault".to_string()),
            ..Default::default()
        });
        assert_eq!(names(&found), vec!["Renault Clio (2022)", "Renault Master (2021)"]);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let mut fleet = autoplus();
        fleet.add_vehicle(Vehicle::car("Citroën", "C3", 2023, 3));

        let found = fleet.search(&SearchCriteria {
            brand: Some("CITROËN".to_string()),
            ..Default::default()
        });
        assert_eq!(names(&found), vec!["Citroën C3 (2023)"]);

        assert!(eq_ignore_case("ÉTOILE", "étoile"));
        assert!(!eq_ignore_case("Citroen", "Citroën"));
    }

    #[test]
    fn search_combines_criteria() {
        let fleet = autoplus();
        let found = fleet.search(&SearchCriteria {
            year: Some(2021),
            vehicle_type: Some(VehicleType::Truck),
            ..Default::default()
        });
        assert_eq!(names(&found), vec!["Renault Master (2021)"]);
    }

    #[test]
    fn duplicate_vehicle_is_rejected() {
        let mut fleet = autoplus();
        assert!(fleet.add_vehicle(Vehicle::car("Renault", "Clio", 2022, 5)).is_none());
        assert_eq!(fleet.len(), 4);
        assert!(fleet.add_vehicle(Vehicle::car("Renault", "Clio", 2023, 5)).is_some());
    }

    #[test]
    fn rented_vehicles_drop_out_of_available() {
        let fleet = autoplus();
        let clio = fleet.find("Renault", "Clio", 2022).unwrap();
        clio.borrow_mut().rent();

        assert_eq!(fleet.available_vehicles().len(), 3);
        assert_eq!(fleet.count(Some(false), None), 1);
        assert_eq!(fleet.count(Some(true), Some(VehicleType::Car)), 1);
    }

    #[test]
    fn remove_by_handle() {
        let mut fleet = autoplus();
        let daily = fleet.find("Iveco", "Daily", 2022).unwrap();
        assert!(fleet.remove_vehicle(&daily));
        assert!(!fleet.remove_vehicle(&daily));
        assert_eq!(fleet.len(), 3);

        let lookalike = Vehicle::car("Renault", "Clio", 2022, 4).shared();
        assert!(!fleet.remove_vehicle(&lookalike));
    }

    #[test]
    fn summary_lists_counts_and_vehicles() {
        let fleet = autoplus();
        let summary = fleet.summary();
        assert!(summary.starts_with("Fleet: AutoPlus\nTotal vehicles: 4\n"));
        assert!(summary.contains("Cars: 2, Trucks: 2"));
        assert!(summary.contains("Available: 4, Rented: 0\n\nVehicles:\n1. Car Renault Clio"));
        assert!(summary.contains("4. Truck Iveco Daily (2022) - Capacity: 7.2 tons - Available"));
    }

    #[test]
    fn empty_fleet_summary_has_no_list() {
        let fleet = Fleet::new("Empty");
        let summary = fleet.summary();
        assert!(!summary.contains("Vehicles:"));
        assert!(summary.ends_with("Available: 0, Rented: 0\n\n"));
    }
}
