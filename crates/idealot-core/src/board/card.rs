use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Half of a card's rendered extent in board units. Anchors and the initial
/// spawn position are offset by these so the card's visual center lands on
/// the target point.
pub const CARD_HALF_WIDTH: f64 = 96.0;
pub const CARD_HALF_HEIGHT: f64 = 60.0;

/// Cards younger than this (in days) classify as `Do`.
pub const FRESH_AGE_MAX_DAYS: f64 = 2.0;
/// Cards older than this (in days) classify as `Forget` and are due for review.
pub const ACTIVE_AGE_MAX_DAYS: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Do,
    Someday,
    Forget,
}

impl Zone {
    /// Horizontal anchor of this zone as a fraction of board width.
    pub fn anchor_fraction(self) -> f64 {
        match self {
            Zone::Do => 0.16,
            Zone::Someday => 0.50,
            Zone::Forget => 0.83,
        }
    }

    /// Age-implied zone. Boundaries are closed on the lower side: exactly
    /// 2 days is still `Do`, exactly 14 days is still `Someday`.
    pub fn for_age_days(age_days: f64) -> Self {
        if age_days > ACTIVE_AGE_MAX_DAYS {
            Zone::Forget
        } else if age_days > FRESH_AGE_MAX_DAYS {
            Zone::Someday
        } else {
            Zone::Do
        }
    }

    /// Zone implied by a manual placement, from the card's right-anchored
    /// reference point (`x + CARD_HALF_WIDTH`). Independent of age.
    pub fn for_drag_x(reference_x: f64, board_width: f64) -> Self {
        if reference_x < board_width * 0.33 {
            Zone::Do
        } else if reference_x > board_width * 0.66 {
            Zone::Forget
        } else {
            Zone::Someday
        }
    }
}

/// Context injected into every operation that needs time or geometry.
/// The core never reads the clock or viewport size from ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct BoardContext {
    /// Wall-clock milliseconds since the Unix epoch.
    pub now_ms: u64,
    pub width: f64,
    pub height: f64,
}

impl BoardContext {
    pub fn new(now_ms: u64, width: f64, height: f64) -> Self {
        Self {
            now_ms,
            width,
            height,
        }
    }

    /// Spawn position for a new card: visually centered on the board.
    pub fn center(&self) -> (f64, f64) {
        (
            self.width * 0.5 - CARD_HALF_WIDTH,
            self.height * 0.5 - CARD_HALF_HEIGHT,
        )
    }
}

/// A single idea on the board.
///
/// Field names serialize in camelCase so the on-disk document round-trips
/// data written by earlier builds of the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub text: String,
    /// Creation time (epoch ms). Reset by the review "Keep" action.
    pub created_at: u64,
    /// Last mutation time (epoch ms). Moves on drag-stop and zone changes.
    pub updated_at: u64,
    /// Last confirmed zone: set by drag-stop, review reset, or a drift step
    /// that committed a position change. May legitimately lag the
    /// age-implied zone for pinned or cooldown-protected cards.
    pub zone: Zone,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dragged_at: Option<u64>,
}

impl Card {
    pub fn age_days(&self, now_ms: u64) -> f64 {
        now_ms.saturating_sub(self.created_at) as f64 / MS_PER_DAY
    }

    /// Age-implied zone, computed on demand and never persisted.
    pub fn age_zone(&self, now_ms: u64) -> Zone {
        Zone::for_age_days(self.age_days(now_ms))
    }

    /// True while the post-drag cooldown suppresses drift for this card.
    pub fn in_cooldown(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        self.last_dragged_at
            .is_some_and(|t| now_ms.saturating_sub(t) < cooldown_ms)
    }
}
