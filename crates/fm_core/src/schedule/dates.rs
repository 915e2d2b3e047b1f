use crate::calendar::SeasonDates;
use crate::config::ScheduleConfig;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};

/// Regular-season dates that may host games: configured weekdays between
/// the regular-season start and end (inclusive), minus the all-star window.
pub fn candidate_dates(year: i32, config: &ScheduleConfig) -> Result<Vec<NaiveDate>> {
    let dates = SeasonDates::for_year(year)?;
    let all_star = dates.all_star_break;

    Ok(dates
        .regular_season_start
        .iter_days()
        .take_while(|d| *d <= dates.regular_season_end)
        .filter(|d| config.game_weekdays.contains(&d.weekday()))
        .filter(|d| (*d - all_star).num_days().abs() > config.all_star_exclusion_days)
        .collect())
}
