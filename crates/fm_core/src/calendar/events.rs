use crate::models::EventId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    GameDay,
    ContractExpiry,
    TradeDeadline,
    FreeAgencyStart,
    Draft,
    PlayerBirthday,
    InjuryRecovery,
    SeasonTransition,
    AllStarBreak,
    PlayoffStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub id: EventId,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub priority: EventPriority,
    pub description: String,
}

impl SimulationEvent {
    pub fn new(
        date: NaiveDate,
        event_type: EventType,
        priority: EventPriority,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(),
            date,
            event_type,
            priority,
            description: description.into(),
        }
    }
}

/// Events kept in date order. Events sharing a date keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_event(&mut self, event: SimulationEvent) {
        let idx = self.events.partition_point(|e| e.date <= event.date);
        self.events.insert(idx, event);
    }

    /// Whether an event of this type is already queued on `date`.
    pub fn contains(&self, date: NaiveDate, event_type: EventType) -> bool {
        self.events
            .iter()
            .any(|e| e.date == date && e.event_type == event_type)
    }

    /// Events due on `date`, highest priority first.
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&SimulationEvent> {
        let mut due: Vec<&SimulationEvent> =
            self.events.iter().filter(|e| e.date == date).collect();
        due.sort_by(|a, b| b.priority.cmp(&a.priority));
        due
    }

    /// Drops every event dated strictly before `cutoff`. Returns how many
    /// were removed.
    pub fn remove_processed_events(&mut self, cutoff: NaiveDate) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.date >= cutoff);
        before - self.events.len()
    }

    pub fn upcoming(&self, from: NaiveDate, limit: usize) -> Vec<&SimulationEvent> {
        self.events
            .iter()
            .filter(|e| e.date >= from)
            .take(limit)
            .collect()
    }

    pub fn all(&self) -> &[SimulationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
