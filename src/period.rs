// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use crate::error::{Result, StoreError};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. Only constructible with a month in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(StoreError::InvalidPeriod(format!(
                "month {} out of range 1-12",
                month
            )));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| StoreError::InvalidPeriod(format!("year {} out of range", year)))?;
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The local calendar month.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Every month of `year` and of the year before, December first.
    pub fn picker(year: i32) -> Vec<Period> {
        [year, year - 1]
            .into_iter()
            .flat_map(|y| (1..=12).rev().map(move |month| Period { year: y, month }))
            .collect()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// `YYYY-MM`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl FromStr for Period {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map_err(
            |_| StoreError::InvalidPeriod(format!("'{}', expected YYYY-MM", s)),
        )?;
        Ok(Self::of(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn contains_month_boundaries_only() {
        let p = Period::new(2025, 2).unwrap();
        assert!(p.contains(d(2025, 2, 1)));
        assert!(p.contains(d(2025, 2, 28)));
        assert!(!p.contains(d(2025, 1, 31)));
        assert!(!p.contains(d(2025, 3, 1)));
        assert!(!p.contains(d(2024, 2, 15)));
    }

    #[test]
    fn last_day_handles_leap_years_and_december() {
        assert_eq!(Period::new(2024, 2).unwrap().last_day(), d(2024, 2, 29));
        assert_eq!(Period::new(2025, 2).unwrap().last_day(), d(2025, 2, 28));
        assert_eq!(Period::new(2025, 12).unwrap().last_day(), d(2025, 12, 31));
    }

    #[test]
    fn next_and_prev_wrap_years() {
        let jan = Period::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), Period::new(2025, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
    }

    #[test]
    fn picker_covers_two_calendar_years() {
        let options = Period::picker(2026);
        assert_eq!(options.len(), 24);
        assert_eq!(options[0].key(), "2026-12");
        assert_eq!(options[11].key(), "2026-01");
        assert_eq!(options[12].key(), "2025-12");
        assert_eq!(options[23].key(), "2025-01");
    }

    #[test]
    fn accessors_expose_validated_fields() {
        let p = Period::new(2025, 12).unwrap();
        assert_eq!((p.year(), p.month()), (2025, 12));
        assert!(Period::new(2025, 13).is_err());
        let parsed: Period = "2025-07".parse().unwrap();
        assert_eq!(parsed.month(), 7);
        assert_eq!(parsed.month_name(), "July");
    }

    #[test]
    fn parse_and_display() {
        let p: Period = "2026-10".parse().unwrap();
        assert_eq!(p.to_string(), "October 2026");
        assert!("2026-13".parse::<Period>().is_err());
        assert!(Period::new(2026, 0).is_err());
    }
}
