//! Date-diff command - approximate day count between two dates

use clap::Args;
use fleetrent::core::{is_leap_year, Date};

#[derive(Args, Debug)]
pub struct DateDiffCommand {
    /// First date (DD/MM/YYYY or YYYY-MM-DD)
    first: Date,

    /// Second date, defaults to today
    second: Option<Date>,
}

impl DateDiffCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let second = self.second.unwrap_or_else(Date::today);
        println!(
            "Difference between {} and {}: {} day(s)",
            self.first,
            second,
            self.first.difference(&second)
        );
        let mut years = vec![self.first.year(), second.year()];
        years.dedup();
        for year in years.into_iter().filter(|y| is_leap_year(*y)) {
            println!("{} is a leap year", year);
        }
        Ok(())
    }
}
