use crate::error::{Result, SimulationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month that opens a new season year (August).
pub const SEASON_ROLLOVER_MONTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonPhase {
    Preseason,
    Regular,
    Playoffs,
    Offseason,
}

impl SeasonPhase {
    pub fn display_name(&self) -> &'static str {
        match self {
            SeasonPhase::Preseason => "Pre-Season",
            SeasonPhase::Regular => "Regular Season",
            SeasonPhase::Playoffs => "Playoffs",
            SeasonPhase::Offseason => "Off-Season",
        }
    }

    pub fn next(&self) -> SeasonPhase {
        match self {
            SeasonPhase::Preseason => SeasonPhase::Regular,
            SeasonPhase::Regular => SeasonPhase::Playoffs,
            SeasonPhase::Playoffs => SeasonPhase::Offseason,
            SeasonPhase::Offseason => SeasonPhase::Preseason,
        }
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Season year a date belongs to. Seasons span two calendar years and
/// turn over on August 1.
pub fn season_year_of(date: NaiveDate) -> i32 {
    if date.month() >= SEASON_ROLLOVER_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Fixed milestone dates of one season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonDates {
    pub year: i32,
    pub season_start: NaiveDate,
    pub regular_season_start: NaiveDate,
    pub all_star_break: NaiveDate,
    pub trade_deadline: NaiveDate,
    pub regular_season_end: NaiveDate,
    pub playoff_start: NaiveDate,
    pub playoff_end: NaiveDate,
    pub draft: NaiveDate,
    pub free_agency_start: NaiveDate,
    /// First day of the next season year
    pub next_season_rollover: NaiveDate,
}

impl SeasonDates {
    pub fn for_year(year: i32) -> Result<Self> {
        let ymd = |y: i32, m: u32, d: u32| {
            NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                SimulationError::InvalidDate(format!("{y}-{m:02}-{d:02} is out of range"))
            })
        };
        let next = year + 1;
        Ok(Self {
            year,
            season_start: ymd(year, 10, 1)?,
            regular_season_start: ymd(year, 10, 10)?,
            all_star_break: ymd(next, 2, 15)?,
            trade_deadline: ymd(next, 3, 3)?,
            regular_season_end: ymd(next, 4, 15)?,
            playoff_start: ymd(next, 4, 20)?,
            playoff_end: ymd(next, 6, 15)?,
            draft: ymd(next, 6, 25)?,
            free_agency_start: ymd(next, 7, 1)?,
            next_season_rollover: ymd(next, SEASON_ROLLOVER_MONTH, 1)?,
        })
    }

    /// Phase on `date`, assuming `date` falls in this season year.
    pub fn phase_on(&self, date: NaiveDate) -> SeasonPhase {
        if date < self.regular_season_start {
            SeasonPhase::Preseason
        } else if date < self.regular_season_end {
            SeasonPhase::Regular
        } else if date < self.playoff_end {
            SeasonPhase::Playoffs
        } else {
            SeasonPhase::Offseason
        }
    }

    /// Date on which `phase` hands over to the following one.
    pub fn phase_end(&self, phase: SeasonPhase) -> NaiveDate {
        match phase {
            SeasonPhase::Preseason => self.regular_season_start,
            SeasonPhase::Regular => self.regular_season_end,
            SeasonPhase::Playoffs => self.playoff_end,
            SeasonPhase::Offseason => self.next_season_rollover,
        }
    }
}

/// Phase as a pure function of the date.
pub fn phase_on(date: NaiveDate) -> Result<(i32, SeasonPhase)> {
    let year = season_year_of(date);
    Ok((year, SeasonDates::for_year(year)?.phase_on(date)))
}
