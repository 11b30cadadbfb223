//! Reporting period windows.
//!
//! # Responsibility
//! - Turn a month or year selection into a half-open date window.
//!
//! # Invariants
//! - `start()` is inclusive, `end()` exclusive.
//! - Month 12 rolls over into January of the following year.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PeriodResult<T> = Result<T, PeriodError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl Display for PeriodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "month must be between 1 and 12, got {month}")
            }
            Self::InvalidYear(year) => write!(f, "year {year} is out of range"),
        }
    }
}

impl Error for PeriodError {}

/// A month or year window used for aggregation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Window `[first day of month, first day of next month)`.
    pub fn month(year: i32, month: u32) -> PeriodResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let start = month_start(year, month)?;
        let end = if month == 12 {
            month_start(year + 1, 1)?
        } else {
            month_start(year, month + 1)?
        };
        Ok(Self { start, end })
    }

    /// Window `[Jan 1, Jan 1 of the following year)`.
    pub fn year(year: i32) -> PeriodResult<Self> {
        let start = month_start(year, 1)?;
        let end = month_start(year + 1, 1)?;
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

fn month_start(year: i32, month: u32) -> PeriodResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::InvalidYear(year))
}
