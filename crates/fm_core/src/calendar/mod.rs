//! Season calendar
//!
//! A date-driven state machine over the four season phases and a
//! date-ordered event queue. Phase and season year are functions of the
//! current date; advancing fires due events exactly once.

mod events;
mod phase;
mod season_calendar;

pub use events::{EventPriority, EventQueue, EventType, SimulationEvent};
pub use phase::{phase_on, season_year_of, SeasonDates, SeasonPhase};
pub use season_calendar::SeasonCalendar;
