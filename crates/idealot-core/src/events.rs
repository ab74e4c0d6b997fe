use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::Zone;

/// Every observable state change produces an Event.
/// The rendering layer consumes these; it never mutates core state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CardAdded {
        id: Uuid,
        text: String,
        zone: Zone,
        x: f64,
        y: f64,
        at: DateTime<Utc>,
    },
    CardRemoved {
        id: Uuid,
        at: DateTime<Utc>,
    },
    CardPinned {
        id: Uuid,
        pinned: bool,
        at: DateTime<Utc>,
    },
    CardDragged {
        id: Uuid,
        x: f64,
        y: f64,
        zone: Zone,
        at: DateTime<Utc>,
    },
    /// Review "Keep": the card's age clock was reset.
    CardKept {
        id: Uuid,
        at: DateTime<Utc>,
    },
    DriftTicked {
        ticks: u32,
        moved: usize,
        reclassified: usize,
        revision: u64,
        at: DateTime<Utc>,
    },
    BoardSnapshot {
        total: usize,
        do_count: usize,
        someday_count: usize,
        forget_count: usize,
        pinned_count: usize,
        revision: u64,
        at: DateTime<Utc>,
    },
}
