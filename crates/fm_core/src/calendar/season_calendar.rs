use super::events::{EventPriority, EventQueue, EventType, SimulationEvent};
use super::phase::{self, SeasonDates, SeasonPhase};
use crate::config::CalendarConfig;
use crate::error::{Result, SimulationError};
use chrono::{Days, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};

fn default_retention() -> i64 {
    CalendarConfig::default().event_retention_days
}

/// Current date, season year and phase, plus the queue of future events.
///
/// `phase` and `season` are always re-derivable from `current_date`; they
/// are stored so a serialized calendar reads naturally and so a change can
/// be detected after each advance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonCalendar {
    pub current_date: NaiveDate,
    pub season: i32,
    pub phase: SeasonPhase,
    pub event_queue: EventQueue,
    #[serde(default = "default_retention")]
    pub event_retention_days: i64,
}

impl SeasonCalendar {
    /// Calendar on the first day of training camp (Oct 1) of `start_year`.
    pub fn new(start_year: i32) -> Result<Self> {
        Self::with_config(start_year, &CalendarConfig::default())
    }

    pub fn with_config(start_year: i32, config: &CalendarConfig) -> Result<Self> {
        let dates = SeasonDates::for_year(start_year)?;
        let mut calendar = Self {
            current_date: dates.season_start,
            season: start_year,
            phase: dates.phase_on(dates.season_start),
            event_queue: EventQueue::new(),
            event_retention_days: config.event_retention_days,
        };
        calendar.schedule_season_events()?;
        Ok(calendar)
    }

    pub fn dates(&self) -> Result<SeasonDates> {
        SeasonDates::for_year(self.season)
    }

    /// Move forward `days` days, firing each intermediate day's events in
    /// date order. Returns the fired events, including any phase-change
    /// event produced at the end.
    pub fn advance(&mut self, days: i64) -> Result<Vec<SimulationEvent>> {
        if days <= 0 {
            return Err(SimulationError::InvalidDate(format!(
                "cannot advance by {days} days"
            )));
        }

        // walk on a copy so a failed step leaves the calendar where it was
        let mut date = self.current_date;
        let mut fired = Vec::new();
        for _ in 0..days {
            date = date
                .succ_opt()
                .ok_or_else(|| SimulationError::InvalidDate(format!("no day after {date}")))?;
            fired.extend(self.event_queue.events_for_date(date).into_iter().cloned());
        }
        self.current_date = date;

        if let Some(transition) = self.refresh_phase()? {
            fired.push(transition);
        }

        let retention = u64::try_from(self.event_retention_days.max(0)).unwrap_or(0);
        if let Some(cutoff) = self.current_date.checked_sub_days(Days::new(retention)) {
            let pruned = self.event_queue.remove_processed_events(cutoff);
            if pruned > 0 {
                debug!("pruned {} events before {}", pruned, cutoff);
            }
        }

        for event in &fired {
            debug!("event fired on {}: {}", event.date, event.description);
        }
        Ok(fired)
    }

    pub fn advance_to_date(&mut self, target: NaiveDate) -> Result<Vec<SimulationEvent>> {
        let days = (target - self.current_date).num_days();
        self.advance(days)
    }

    /// Jump to the first day of the next phase.
    pub fn transition_to_next_phase(&mut self) -> Result<Vec<SimulationEvent>> {
        let target = self.dates()?.phase_end(self.phase);
        self.advance_to_date(target)
    }

    fn refresh_phase(&mut self) -> Result<Option<SimulationEvent>> {
        let (year, phase) = phase::phase_on(self.current_date)?;
        if year == self.season && phase == self.phase {
            return Ok(None);
        }

        let old_phase = self.phase;
        self.phase = phase;
        if year > self.season {
            info!("season rolled over from {} to {}", self.season, year);
            self.season = year;
            self.schedule_season_events()?;
        }
        info!("phase changed from {} to {} on {}", old_phase, phase, self.current_date);

        let description = if old_phase == phase {
            format!("Season {} begins", self.season_display_string())
        } else {
            format!("Season phase changed from {} to {}", old_phase, phase)
        };
        let event = SimulationEvent::new(
            self.current_date,
            EventType::SeasonTransition,
            EventPriority::High,
            description,
        );
        self.event_queue.schedule_event(event.clone());
        Ok(Some(event))
    }

    /// Queue this season's milestone events. Milestones already queued are
    /// not duplicated.
    fn schedule_season_events(&mut self) -> Result<()> {
        let dates = self.dates()?;
        let milestones = [
            (
                dates.regular_season_start,
                EventType::SeasonTransition,
                EventPriority::High,
                "Regular season begins",
            ),
            (dates.all_star_break, EventType::AllStarBreak, EventPriority::Medium, "All-Star Break"),
            (dates.trade_deadline, EventType::TradeDeadline, EventPriority::Critical, "Trade Deadline"),
            (dates.playoff_start, EventType::PlayoffStart, EventPriority::High, "Playoffs begin"),
            (dates.draft, EventType::Draft, EventPriority::High, "Entry Draft"),
            (
                dates.free_agency_start,
                EventType::FreeAgencyStart,
                EventPriority::High,
                "Free Agency begins",
            ),
        ];
        for (date, event_type, priority, description) in milestones {
            if !self.event_queue.contains(date, event_type) {
                self.event_queue
                    .schedule_event(SimulationEvent::new(date, event_type, priority, description));
            }
        }
        Ok(())
    }

    pub fn schedule_event(&mut self, event: SimulationEvent) {
        self.event_queue.schedule_event(event);
    }

    pub fn upcoming_events(&self, limit: usize) -> Vec<&SimulationEvent> {
        self.event_queue.upcoming(self.current_date, limit)
    }

    /// "2025-26"
    pub fn season_display_string(&self) -> String {
        format!("{}-{:02}", self.season, (self.season + 1).rem_euclid(100))
    }

    /// "Oct 01, 2025"
    pub fn formatted_date(&self) -> String {
        self.current_date.format("%b %d, %Y").to_string()
    }

    pub fn days_until_next_phase(&self) -> Result<i64> {
        let next = self.dates()?.phase_end(self.phase);
        Ok((next - self.current_date).num_days().max(0))
    }

    pub fn is_trade_deadline(&self) -> Result<bool> {
        Ok(self.current_date == self.dates()?.trade_deadline)
    }

    /// Within three days either side of the all-star date
    pub fn is_all_star_break(&self) -> Result<bool> {
        let all_star = self.dates()?.all_star_break;
        Ok((self.current_date - all_star).num_days().abs() <= 3)
    }

    /// Rough count from the calendar alone; the schedule is the real answer.
    pub fn estimated_games_remaining(&self, games_per_team: u32) -> Result<u32> {
        Ok(match self.phase {
            SeasonPhase::Preseason => games_per_team,
            SeasonPhase::Regular => {
                let days = (self.dates()?.regular_season_end - self.current_date).num_days();
                let estimate = u32::try_from((days / 2).max(0)).unwrap_or(u32::MAX);
                estimate.min(games_per_team)
            }
            SeasonPhase::Playoffs | SeasonPhase::Offseason => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_calendar_starts_in_preseason() {
        let cal = SeasonCalendar::new(2025).unwrap();
        assert_eq!(cal.current_date, d(2025, 10, 1));
        assert_eq!(cal.phase, SeasonPhase::Preseason);
        assert_eq!(cal.season_display_string(), "2025-26");
        assert_eq!(cal.formatted_date(), "Oct 01, 2025");
        assert_eq!(cal.event_queue.len(), 6);
        assert_eq!(cal.days_until_next_phase().unwrap(), 9);
    }

    #[test]
    fn test_advance_rejects_non_positive_days() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        assert!(matches!(cal.advance(0), Err(SimulationError::InvalidDate(_))));
        assert!(matches!(cal.advance(-3), Err(SimulationError::InvalidDate(_))));
        assert_eq!(cal.current_date, d(2025, 10, 1));
    }

    #[test]
    fn test_failed_walk_leaves_calendar_untouched() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        let near_end = NaiveDate::MAX.pred_opt().unwrap();
        cal.current_date = near_end;
        let queued = cal.event_queue.len();

        assert!(matches!(cal.advance(5), Err(SimulationError::InvalidDate(_))));
        assert_eq!(cal.current_date, near_end);
        assert_eq!(cal.season, 2025);
        assert_eq!(cal.event_queue.len(), queued);
    }

    #[test]
    fn test_advance_into_regular_season_fires_once() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        let fired = cal.advance(9).unwrap();
        assert_eq!(cal.current_date, d(2025, 10, 10));
        assert_eq!(cal.phase, SeasonPhase::Regular);
        // milestone + computed phase change
        assert_eq!(fired.len(), 2);
        assert!(fired.iter().all(|e| e.event_type == EventType::SeasonTransition));

        let fired = cal.advance(1).unwrap();
        assert!(fired.is_empty());
    }

    #[test]
    fn test_trade_deadline_and_all_star_queries() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        cal.advance_to_date(d(2026, 2, 12)).unwrap();
        assert!(cal.is_all_star_break().unwrap());
        cal.advance_to_date(d(2026, 2, 19)).unwrap();
        assert!(!cal.is_all_star_break().unwrap());

        let fired = cal.advance_to_date(d(2026, 3, 3)).unwrap();
        assert!(cal.is_trade_deadline().unwrap());
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].event_type, EventType::TradeDeadline);
    }

    #[test]
    fn test_transition_walks_phase_cycle_and_increments_season() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        let expected = [
            (SeasonPhase::Regular, 2025),
            (SeasonPhase::Playoffs, 2025),
            (SeasonPhase::Offseason, 2025),
            (SeasonPhase::Preseason, 2026),
            (SeasonPhase::Regular, 2026),
        ];
        for (phase, season) in expected {
            cal.transition_to_next_phase().unwrap();
            assert_eq!((cal.phase, cal.season), (phase, season));
        }
        assert_eq!(cal.current_date, d(2026, 10, 10));
    }

    #[test]
    fn test_games_remaining_estimate() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        assert_eq!(cal.estimated_games_remaining(82).unwrap(), 82);
        cal.advance_to_date(d(2026, 4, 5)).unwrap();
        assert_eq!(cal.estimated_games_remaining(82).unwrap(), 5);
        cal.advance_to_date(d(2026, 5, 1)).unwrap();
        assert_eq!(cal.estimated_games_remaining(82).unwrap(), 0);
    }

    #[test]
    fn test_old_events_are_pruned() {
        let mut cal = SeasonCalendar::new(2025).unwrap();
        cal.advance_to_date(d(2025, 10, 20)).unwrap();
        assert!(cal.event_queue.all().iter().all(|e| e.date >= d(2025, 10, 13)));
    }
}
