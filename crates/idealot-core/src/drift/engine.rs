//! Drift engine implementation.
//!
//! The engine is a pure, tick-driven stepper. It holds no clock and no
//! viewport -- every tick receives an explicit [`BoardContext`] -- so the
//! caller decides when ticks happen and a test can replay any timeline.
//!
//! Per tick, for every card in the store:
//!
//! 1. skip pinned cards, the card under active drag, and cards inside the
//!    post-drag cooldown;
//! 2. classify a target zone purely by age;
//! 3. cards within snap distance of their anchor are left untouched;
//! 4. otherwise step a fixed length along the normalized direction and,
//!    together with the committed position, reconfirm the zone.
//!
//! A tick that moves nothing leaves the store's revision untouched, so the
//! renderer can skip re-draws cheaply.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::{BoardContext, CardStore, Zone, CARD_HALF_HEIGHT, CARD_HALF_WIDTH};

/// Tunable drift parameters.
///
/// Serialized into the config file under `[drift]`. The age-classification
/// boundaries (2 and 14 days) are part of the contract and not tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftTuning {
    /// Tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Step length per tick, in board units.
    #[serde(default = "default_step")]
    pub step: f64,
    /// Distance below which a card counts as arrived at its anchor.
    #[serde(default = "default_snap_distance")]
    pub snap_distance: f64,
    /// Per-axis displacement below which a step is treated as a no-op.
    #[serde(default = "default_min_motion")]
    pub min_motion: f64,
    /// Drift suppression window after a manual drag, in milliseconds.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

fn default_tick_ms() -> u64 {
    50
}
fn default_step() -> f64 {
    0.2
}
fn default_snap_distance() -> f64 {
    2.0
}
fn default_min_motion() -> f64 {
    0.01
}
fn default_cooldown_ms() -> u64 {
    30_000
}

impl Default for DriftTuning {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            step: default_step(),
            snap_distance: default_snap_distance(),
            min_motion: default_min_motion(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

/// What a single tick did to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Cards whose position changed this tick.
    pub moved: usize,
    /// Cards whose confirmed zone changed together with a position change.
    pub reclassified: usize,
}

impl TickOutcome {
    pub fn is_noop(&self) -> bool {
        self.moved == 0
    }

    pub fn merge(&mut self, other: TickOutcome) {
        self.moved += other.moved;
        self.reclassified += other.reclassified;
    }
}

#[derive(Debug, Clone, Default)]
pub struct DriftEngine {
    tuning: DriftTuning,
}

impl DriftEngine {
    pub fn new(tuning: DriftTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &DriftTuning {
        &self.tuning
    }

    /// Anchor point for a zone: the zone's horizontal fraction of board
    /// width, vertically centered, offset by half the card's extent.
    pub fn anchor(&self, zone: Zone, ctx: &BoardContext) -> (f64, f64) {
        (
            ctx.width * zone.anchor_fraction() - CARD_HALF_WIDTH,
            ctx.height / 2.0 - CARD_HALF_HEIGHT,
        )
    }

    /// Advance every eligible card one step toward its age-implied anchor.
    ///
    /// `active_drag` is the card currently held by the user, if any; it is
    /// never touched. The store revision is bumped at most once, and only
    /// if at least one card moved.
    pub fn tick(
        &self,
        store: &mut CardStore,
        active_drag: Option<Uuid>,
        ctx: &BoardContext,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        for card in store.cards_mut() {
            if card.pinned {
                continue;
            }
            if active_drag == Some(card.id) {
                continue;
            }
            if card.in_cooldown(ctx.now_ms, self.tuning.cooldown_ms) {
                continue;
            }

            let target = card.age_zone(ctx.now_ms);
            let (tx, ty) = self.anchor(target, ctx);

            let dx = tx - card.x;
            let dy = ty - card.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < self.tuning.snap_distance {
                // Arrived. Zone is only reconfirmed together with a
                // position change, so leave the card exactly as it is.
                continue;
            }

            let move_x = dx / dist * self.tuning.step;
            let move_y = dy / dist * self.tuning.step;
            if move_x.abs() > self.tuning.min_motion || move_y.abs() > self.tuning.min_motion {
                card.x += move_x;
                card.y += move_y;
                outcome.moved += 1;
                if card.zone != target {
                    card.zone = target;
                    card.updated_at = ctx.now_ms;
                    outcome.reclassified += 1;
                }
            }
        }

        if outcome.moved > 0 {
            store.bump_revision();
        }
        outcome
    }
}
