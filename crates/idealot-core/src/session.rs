//! Interaction state over the card store.
//!
//! A [`BoardSession`] mediates selection, the drag lifecycle, search
//! filtering, and review-mode actions, translating gestures into store
//! operations. It is also where the active-drag id lives: drag-start and
//! drag-stop update it synchronously, so no drift tick ever observes a
//! stale value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::{BoardContext, Card, CardStore, Zone, ACTIVE_AGE_MAX_DAYS};
use crate::drift::{DriftEngine, TickOutcome};

/// Whether deleting a card requires prior confirmation.
///
/// One policy covers both delete paths (keyboard and review mode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    #[default]
    Confirm,
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Uuid),
    /// The policy requires confirmation and the caller did not confirm.
    NeedsConfirmation,
    NothingSelected,
}

#[derive(Debug)]
pub struct BoardSession {
    store: CardStore,
    engine: DriftEngine,
    delete_policy: DeletePolicy,
    selected: Option<Uuid>,
    active_drag: Option<Uuid>,
    search: Option<String>,
    review_mode: bool,
}

impl BoardSession {
    pub fn new(store: CardStore, engine: DriftEngine, delete_policy: DeletePolicy) -> Self {
        Self {
            store,
            engine,
            delete_policy,
            selected: None,
            active_drag: None,
            search: None,
            review_mode: false,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CardStore {
        &mut self.store
    }

    pub fn engine(&self) -> &DriftEngine {
        &self.engine
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn active_drag(&self) -> Option<Uuid> {
        self.active_drag
    }

    pub fn review_mode(&self) -> bool {
        self.review_mode
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Select a card (exclusive). Unknown ids clear nothing and report false.
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.store.get(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Background click: clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ── Drag lifecycle ───────────────────────────────────────────────

    /// Mark a card as actively dragged (exempting it from drift) and
    /// select it.
    pub fn drag_start(&mut self, id: Uuid) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.active_drag = Some(id);
        self.selected = Some(id);
        true
    }

    /// Finish the drag: commit position and zone, clear active-drag state.
    /// Returns the confirmed zone, or `None` if no drag was active.
    pub fn drag_stop(&mut self, x: f64, y: f64, ctx: &BoardContext) -> Option<Zone> {
        let id = self.active_drag.take()?;
        self.store.apply_drag_result(id, x, y, ctx)
    }

    // ── Card actions ─────────────────────────────────────────────────

    /// Toggle the pin flag on the selected card. No-op without a selection.
    pub fn toggle_pin_selected(&mut self) -> Option<bool> {
        let id = self.selected?;
        let pinned = !self.store.get(id)?.pinned;
        self.store.set_pinned(id, pinned);
        Some(pinned)
    }

    /// Delete the selected card, honoring the configured confirmation
    /// policy. `confirmed` is the caller's answer to a prior prompt.
    pub fn delete_selected(&mut self, confirmed: bool) -> DeleteOutcome {
        let Some(id) = self.selected else {
            return DeleteOutcome::NothingSelected;
        };
        if self.delete_policy == DeletePolicy::Confirm && !confirmed {
            return DeleteOutcome::NeedsConfirmation;
        }
        self.store.remove(id);
        self.selected = None;
        if self.active_drag == Some(id) {
            self.active_drag = None;
        }
        DeleteOutcome::Deleted(id)
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Set or clear the free-text filter. Does not mutate the store.
    pub fn set_search(&mut self, query: Option<String>) {
        self.search = query.filter(|q| !q.trim().is_empty());
    }

    /// The rendered card set: all cards, narrowed by the search filter
    /// (case-insensitive substring match).
    pub fn visible_cards(&self) -> Vec<&Card> {
        match &self.search {
            Some(query) => {
                let needle = query.to_lowercase();
                self.store
                    .cards()
                    .iter()
                    .filter(|c| c.text.to_lowercase().contains(&needle))
                    .collect()
            }
            None => self.store.cards().iter().collect(),
        }
    }

    // ── Review mode ──────────────────────────────────────────────────

    pub fn set_review_mode(&mut self, on: bool) {
        self.review_mode = on;
    }

    /// Review emphasis rule: cards older than 14 days.
    pub fn is_due_for_review(card: &Card, now_ms: u64) -> bool {
        card.age_days(now_ms) > ACTIVE_AGE_MAX_DAYS
    }

    pub fn review_due(&self, now_ms: u64) -> Vec<&Card> {
        self.store
            .cards()
            .iter()
            .filter(|c| Self::is_due_for_review(c, now_ms))
            .collect()
    }

    /// The review "Keep" action on the selected card: reset its age so it
    /// re-enters the drift cycle. Clears the selection on success.
    pub fn keep_selected(&mut self, ctx: &BoardContext) -> Option<Uuid> {
        let id = self.selected?;
        if self.store.reset_for_review(id, ctx) {
            self.selected = None;
            Some(id)
        } else {
            None
        }
    }

    // ── Drift ────────────────────────────────────────────────────────

    /// Run one drift tick, exempting the card under active drag.
    pub fn drift_tick(&mut self, ctx: &BoardContext) -> TickOutcome {
        self.engine.tick(&mut self.store, self.active_drag, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MS_PER_DAY;

    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;

    fn ctx(now_ms: u64) -> BoardContext {
        BoardContext::new(now_ms, WIDTH, HEIGHT)
    }

    fn session_with(texts: &[&str]) -> (BoardSession, Vec<Uuid>) {
        let mut store = CardStore::new();
        let ids = texts
            .iter()
            .map(|t| store.add(t, &ctx(0)).unwrap().id)
            .collect();
        (
            BoardSession::new(store, DriftEngine::default(), DeletePolicy::Confirm),
            ids,
        )
    }

    #[test]
    fn selection_is_exclusive() {
        let (mut session, ids) = session_with(&["a", "b"]);
        assert!(session.select(ids[0]));
        assert!(session.select(ids[1]));
        assert_eq!(session.selected(), Some(ids[1]));
        session.clear_selection();
        assert_eq!(session.selected(), None);
        assert!(!session.select(Uuid::new_v4()));
    }

    #[test]
    fn drag_lifecycle_updates_shared_state_synchronously() {
        let (mut session, ids) = session_with(&["drag me"]);
        assert!(session.drag_start(ids[0]));
        assert_eq!(session.active_drag(), Some(ids[0]));
        assert_eq!(session.selected(), Some(ids[0]));

        let zone = session.drag_stop(10.0, 40.0, &ctx(500)).unwrap();
        assert_eq!(zone, Zone::Do);
        assert_eq!(session.active_drag(), None);
        assert_eq!(session.store().get(ids[0]).unwrap().last_dragged_at, Some(500));
    }

    #[test]
    fn drag_stop_without_active_drag_is_noop() {
        let (mut session, _) = session_with(&["a"]);
        assert!(session.drag_stop(0.0, 0.0, &ctx(0)).is_none());
    }

    #[test]
    fn dragged_card_is_never_touched_by_a_tick() {
        let (mut session, ids) = session_with(&["held", "free"]);
        // Move both away from their anchors so a tick would move them.
        session.store_mut().apply_drag_result(ids[0], 700.0, 100.0, &ctx(0));
        session.store_mut().apply_drag_result(ids[1], 700.0, 500.0, &ctx(0));
        session.drag_start(ids[0]);

        // Past the drag cooldown for both cards.
        let outcome = session.drift_tick(&ctx(40_000));
        assert_eq!(outcome.moved, 1);
        let held = session.store().get(ids[0]).unwrap();
        assert_eq!((held.x, held.y), (700.0, 100.0));
    }

    #[test]
    fn manual_drag_overrides_age() {
        let (mut session, ids) = session_with(&["old idea"]);
        let now = (20.0 * MS_PER_DAY) as u64;
        session.drag_start(ids[0]);
        let zone = session.drag_stop(10.0, 100.0, &ctx(now)).unwrap();
        assert_eq!(zone, Zone::Do, "drag placement wins regardless of age");

        // Unmoved by drift while the cooldown holds.
        for i in 0..10 {
            let outcome = session.drift_tick(&ctx(now + i * 50));
            assert!(outcome.is_noop());
        }
        // Eligible again once the cooldown expires.
        let outcome = session.drift_tick(&ctx(now + 30_000));
        assert_eq!(outcome.moved, 1);
    }

    #[test]
    fn pin_toggle_requires_selection() {
        let (mut session, ids) = session_with(&["a"]);
        assert_eq!(session.toggle_pin_selected(), None);
        session.select(ids[0]);
        assert_eq!(session.toggle_pin_selected(), Some(true));
        assert_eq!(session.toggle_pin_selected(), Some(false));
    }

    #[test]
    fn delete_respects_confirmation_policy() {
        let (mut session, ids) = session_with(&["a"]);
        assert_eq!(session.delete_selected(true), DeleteOutcome::NothingSelected);

        session.select(ids[0]);
        assert_eq!(session.delete_selected(false), DeleteOutcome::NeedsConfirmation);
        assert_eq!(session.store().len(), 1);

        assert_eq!(session.delete_selected(true), DeleteOutcome::Deleted(ids[0]));
        assert_eq!(session.store().len(), 0);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn immediate_policy_skips_confirmation() {
        let mut store = CardStore::new();
        let id = store.add("gone", &ctx(0)).unwrap().id;
        let mut session =
            BoardSession::new(store, DriftEngine::default(), DeletePolicy::Immediate);
        session.select(id);
        assert_eq!(session.delete_selected(false), DeleteOutcome::Deleted(id));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let (mut session, _) = session_with(&["Water the Garden", "file taxes", "garden fence"]);
        session.set_search(Some("GARDEN".into()));
        let visible: Vec<&str> = session.visible_cards().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(visible, vec!["Water the Garden", "garden fence"]);

        session.set_search(Some("  ".into()));
        assert_eq!(session.visible_cards().len(), 3, "blank query clears the filter");
        assert_eq!(session.store().len(), 3, "search never mutates the store");
    }

    #[test]
    fn review_due_emphasizes_old_cards_only() {
        let (session, _) = session_with(&["young"]);
        let just_under = (14.0 * MS_PER_DAY) as u64;
        assert!(session.review_due(just_under).is_empty());
        let over = (15.0 * MS_PER_DAY) as u64;
        assert_eq!(session.review_due(over).len(), 1);
    }

    #[test]
    fn keep_selected_resets_age_and_clears_selection() {
        let (mut session, ids) = session_with(&["stale"]);
        let now = (20.0 * MS_PER_DAY) as u64;
        session.set_review_mode(true);
        session.select(ids[0]);
        assert_eq!(session.keep_selected(&ctx(now)), Some(ids[0]));
        assert_eq!(session.selected(), None);

        let card = session.store().get(ids[0]).unwrap();
        assert_eq!(card.created_at, now);
        assert_eq!(card.zone, Zone::Someday);
        assert_eq!(card.age_zone(now), Zone::Do, "treated as zero days old again");
    }
}
