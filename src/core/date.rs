use super::error::RentalError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Calendar date validated on construction and on every mutation.
///
/// Fields are declared year first so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if the month is out of range
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS_PER_MONTH[month as usize]),
        _ => None,
    }
}

fn is_valid(day: u32, month: u32, year: i32) -> bool {
    days_in_month(month, year).is_some_and(|max| (1..=max).contains(&day))
}

impl Date {
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, RentalError> {
        if !is_valid(day, month, year) {
            return Err(RentalError::InvalidDate { day, month, year });
        }
        Ok(Date { year, month, day })
    }

    /// Current local date
    pub fn today() -> Self {
        Date::from(Local::now().date_naive())
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_day(&mut self, day: u32) -> Result<(), RentalError> {
        *self = Date::new(day, self.month, self.year)?;
        Ok(())
    }

    pub fn set_month(&mut self, month: u32) -> Result<(), RentalError> {
        *self = Date::new(self.day, month, self.year)?;
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) -> Result<(), RentalError> {
        *self = Date::new(self.day, self.month, year)?;
        Ok(())
    }

    /// Display as "DD/MM/YYYY"
    pub fn format(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }

    /// Approximate number of days between two dates (always non-negative).
    ///
    /// Each date is converted to a day count of `year * 365` plus a leap day
    /// correction plus the day of the year. The count is not calendar exact
    /// across year boundaries: 31/12/2024 and 01/01/2025 are 0 days apart.
    pub fn difference(&self, other: &Date) -> u64 {
        self.signed_difference(other).unsigned_abs()
    }

    /// Signed day count from `self` to `other`, negative when `other` is earlier.
    pub fn signed_difference(&self, other: &Date) -> i64 {
        other.day_count() - self.day_count()
    }

    fn day_count(&self) -> i64 {
        let year = i64::from(self.year);
        let prior_months: i64 = (1..self.month)
            .filter_map(|m| days_in_month(m, self.year))
            .map(i64::from)
            .sum();
        let leap_days = year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400);
        i64::from(self.day) + prior_months + year * 365 + leap_days
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl FromStr for Date {
    type Err = RentalError;

    /// Accepts "DD/MM/YYYY" (zero padding optional) or ISO "YYYY-MM-DD"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Date::from(date));
        }

        let malformed = || RentalError::MalformedDate(s.to_string());
        let parts: Vec<&str> = s.split('/').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(malformed());
        };
        let day = day.parse::<u32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        Date::new(day, month, year)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
