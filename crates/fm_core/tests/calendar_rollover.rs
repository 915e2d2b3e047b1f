use chrono::NaiveDate;
use fm_core::calendar::{phase_on, EventType, SeasonCalendar, SeasonPhase};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_full_cycle_fires_each_milestone_once() {
    let mut calendar = SeasonCalendar::new(2025).unwrap();
    let mut fired = Vec::new();
    while calendar.current_date < d(2026, 7, 31) {
        fired.extend(calendar.advance(1).unwrap());
    }

    for kind in [
        EventType::AllStarBreak,
        EventType::TradeDeadline,
        EventType::PlayoffStart,
        EventType::Draft,
        EventType::FreeAgencyStart,
    ] {
        assert_eq!(fired.iter().filter(|e| e.event_type == kind).count(), 1, "{kind:?}");
    }
    // regular season start milestone plus three computed phase changes
    let transitions = fired.iter().filter(|e| e.event_type == EventType::SeasonTransition).count();
    assert_eq!(transitions, 4);
    assert!(fired.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_rollover_reschedules_milestones() {
    let mut calendar = SeasonCalendar::new(2025).unwrap();
    calendar.advance_to_date(d(2026, 8, 1)).unwrap();
    assert_eq!(calendar.season, 2026);
    assert_eq!(calendar.phase, SeasonPhase::Preseason);
    assert_eq!(calendar.season_display_string(), "2026-27");

    let upcoming = calendar.upcoming_events(10);
    assert!(upcoming.iter().any(|e| e.event_type == EventType::TradeDeadline && e.date == d(2027, 3, 3)));
    assert!(upcoming.iter().all(|e| e.date >= d(2026, 8, 1)));
}

#[test]
fn test_multi_year_jump_tracks_season_year() {
    let mut calendar = SeasonCalendar::new(2025).unwrap();
    calendar.advance(365 * 3).unwrap();
    assert_eq!(calendar.current_date, d(2028, 9, 30));
    assert_eq!(calendar.season, 2028);
    assert_eq!(calendar.phase, SeasonPhase::Preseason);
}

proptest! {
    #[test]
    fn prop_phase_only_wraps_with_new_season(steps in proptest::collection::vec(1i64..40, 1..30)) {
        let mut calendar = SeasonCalendar::new(2025).unwrap();
        for days in steps {
            let (before_season, before_phase) = (calendar.season, calendar.phase);
            calendar.advance(days).unwrap();
            if calendar.season == before_season {
                prop_assert!(calendar.phase >= before_phase);
            } else {
                prop_assert!(calendar.season > before_season);
            }
            prop_assert_eq!(phase_on(calendar.current_date).unwrap(), (calendar.season, calendar.phase));
        }
    }
}
