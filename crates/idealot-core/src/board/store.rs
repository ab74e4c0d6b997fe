//! In-memory card collection.
//!
//! The store is the single source of truth for cards. Every observable
//! mutation bumps a revision counter so a renderer (or a test) can detect
//! no-op drift ticks without diffing the collection.

use uuid::Uuid;

use super::card::{BoardContext, Card, Zone, CARD_HALF_WIDTH};
use crate::error::ValidationError;

#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    revision: u64,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a previously loaded card list. Revision starts at zero.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, revision: 0 }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn get(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bumped on every observable mutation, including drift ticks that
    /// moved at least one card. A tick that moved nothing leaves it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Create a card centered on the board, starting in `Someday`.
    /// Leading/trailing whitespace is trimmed; empty text is rejected.
    pub fn add(&mut self, text: &str, ctx: &BoardContext) -> Result<Card, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let (x, y) = ctx.center();
        let card = Card {
            id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: ctx.now_ms,
            updated_at: ctx.now_ms,
            zone: Zone::Someday,
            x,
            y,
            pinned: false,
            last_dragged_at: None,
        };
        self.cards.push(card.clone());
        self.revision += 1;
        Ok(card)
    }

    /// Delete a card. Unknown ids are a no-op and report `false`.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() != before {
            self.revision += 1;
            true
        } else {
            false
        }
    }

    /// Set the pin flag. No other field changes. Reports whether the card
    /// exists; setting the flag to its current value does not bump revision.
    pub fn set_pinned(&mut self, id: Uuid, pinned: bool) -> bool {
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => {
                if card.pinned != pinned {
                    card.pinned = pinned;
                    self.revision += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Commit a finished drag: position, drag timestamp, and the confirmed
    /// zone derived from the horizontal thresholds. Returns the new zone,
    /// or `None` for an unknown id.
    pub fn apply_drag_result(
        &mut self,
        id: Uuid,
        x: f64,
        y: f64,
        ctx: &BoardContext,
    ) -> Option<Zone> {
        let card = self.cards.iter_mut().find(|c| c.id == id)?;
        card.x = x;
        card.y = y;
        card.last_dragged_at = Some(ctx.now_ms);
        card.updated_at = ctx.now_ms;
        card.zone = Zone::for_drag_x(x + CARD_HALF_WIDTH, ctx.width);
        self.revision += 1;
        Some(card.zone)
    }

    /// The review "Keep" action: back to `Someday` with a fresh creation
    /// time, so the card re-enters the drift cycle from the start.
    pub fn reset_for_review(&mut self, id: Uuid, ctx: &BoardContext) -> bool {
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => {
                card.zone = Zone::Someday;
                card.created_at = ctx.now_ms;
                card.updated_at = ctx.now_ms;
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }
}
