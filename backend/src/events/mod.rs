//! Event logging for universe lifecycle and auditing.
//!
//! The registry records one [`Event`] per lifecycle change, per batch update
//! and per rejected call. Events carry a sequence number that increases by one
//! per logged event, so a log can be replayed or diffed in order.
//!
//! A log may be bounded with [`EventLog::with_limit`]; once full, the oldest
//! event is evicted for each new one. Sequence numbers keep counting across
//! evictions, so a gap at the front shows how much history was dropped.
//!
//! # Example
//!
//! ```rust
//! use toroidal_sim_core::events::{Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::CallRejected {
//!     seq: log.next_seq(),
//!     operation: "create".to_string(),
//!     reason: "grid dimensions must be positive".to_string(),
//! });
//!
//! assert_eq!(log.events_of_type("CallRejected").len(), 1);
//! ```

use std::collections::VecDeque;

use serde::Serialize;

use crate::universe::UniverseHandle;

/// Lifecycle or audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type")]
pub enum Event {
    /// Universe allocated and registered
    UniverseCreated {
        seq: u64,
        handle: UniverseHandle,
        nr: usize,
        nc: usize,
    },

    /// One batch update completed
    UniverseStepped {
        seq: u64,
        handle: UniverseHandle,
        steps: u64,
        total_steps: u64,
    },

    /// Universe grid released
    UniverseDestroyed {
        seq: u64,
        handle: UniverseHandle,
        total_steps: u64,
    },

    /// A call failed validation; nothing was mutated
    CallRejected {
        seq: u64,
        operation: String,
        reason: String,
    },
}

impl Event {
    pub fn seq(&self) -> u64 {
        match self {
            Event::UniverseCreated { seq, .. }
            | Event::UniverseStepped { seq, .. }
            | Event::UniverseDestroyed { seq, .. }
            | Event::CallRejected { seq, .. } => *seq,
        }
    }

    /// Variant name, as used by [`EventLog::events_of_type`].
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::UniverseCreated { .. } => "UniverseCreated",
            Event::UniverseStepped { .. } => "UniverseStepped",
            Event::UniverseDestroyed { .. } => "UniverseDestroyed",
            Event::CallRejected { .. } => "CallRejected",
        }
    }

    /// Handle the event refers to, if any.
    pub fn handle(&self) -> Option<UniverseHandle> {
        match self {
            Event::UniverseCreated { handle, .. }
            | Event::UniverseStepped { handle, .. }
            | Event::UniverseDestroyed { handle, .. } => Some(*handle),
            Event::CallRejected { .. } => None,
        }
    }
}

/// Append-only event log, optionally bounded.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: VecDeque<Event>,
    next_seq: u64,
    limit: Option<usize>,
}

impl EventLog {
    /// Create a new empty, unbounded event log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that keeps at most `limit` of the most recent events.
    ///
    /// A zero limit keeps nothing but still advances sequence numbers.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(limit),
            next_seq: 0,
            limit: Some(limit),
        }
    }

    /// Sequence number the next logged event should carry
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Add an event to the log, evicting the oldest one if the log is full
    pub fn log(&mut self, event: Event) {
        self.next_seq += 1;
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.events.len() >= limit {
                self.events.pop_front();
            }
        }
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Retained events, oldest first
    pub fn events(&self) -> &VecDeque<Event> {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific universe
    pub fn events_for_handle(&self, handle: UniverseHandle) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.handle() == Some(handle))
            .collect()
    }

    /// Serialize the whole log as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events)
    }

    /// Drop retained events; sequence numbers keep counting
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
