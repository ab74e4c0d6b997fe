//! End-to-end drift scenarios through the public API, including a
//! persistence round-trip between simulated app runs.

use idealot_core::{
    BoardContext, BoardDocument, BoardSession, CardStore, DriftEngine, DeletePolicy, Zone,
};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

fn ctx(now_ms: u64) -> BoardContext {
    BoardContext::new(now_ms, WIDTH, HEIGHT)
}

fn anchor_distance(engine: &DriftEngine, zone: Zone, x: f64, y: f64, c: &BoardContext) -> f64 {
    let (ax, ay) = engine.anchor(zone, c);
    ((x - ax).powi(2) + (y - ay).powi(2)).sqrt()
}

#[test]
fn add_then_immediate_drift_moves_toward_do() {
    let engine = DriftEngine::default();
    let mut store = CardStore::new();
    let t = 1_700_000_000_000;
    let card = store.add("fresh idea", &ctx(t)).unwrap();

    let c = ctx(t + 50);
    let before = anchor_distance(&engine, Zone::Do, card.x, card.y, &c);
    let outcome = engine.tick(&mut store, None, &c);
    assert_eq!(outcome.moved, 1);

    let moved = store.get(card.id).unwrap();
    let after = anchor_distance(&engine, Zone::Do, moved.x, moved.y, &c);
    assert!(after < before);
    assert!(before - after <= 0.2 + 1e-9);
}

#[test]
fn board_survives_restart_and_keeps_drifting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("idea-parking-lot.json");
    let engine = DriftEngine::default();

    // First run: add a card and park the board on disk.
    let t0 = 1_700_000_000_000;
    let mut store = CardStore::new();
    let id = store.add("revisit the garden plan", &ctx(t0)).unwrap().id;
    BoardDocument {
        cards: store.into_cards(),
    }
    .save_to(&path)
    .unwrap();

    // Second run, 15 days later: the card converges on Forget.
    let t1 = t0 + 15 * MS_PER_DAY;
    let doc = BoardDocument::load_from(&path);
    let mut store = CardStore::from_cards(doc.cards);
    let c = ctx(t1);
    for _ in 0..100_000 {
        if engine.tick(&mut store, None, &c).is_noop() {
            break;
        }
    }
    let card = store.get(id).unwrap();
    assert_eq!(card.zone, Zone::Forget);
    assert!(anchor_distance(&engine, Zone::Forget, card.x, card.y, &c) < 2.0);

    // Third run: review "Keep" resets the cycle.
    BoardDocument {
        cards: store.into_cards(),
    }
    .save_to(&path)
    .unwrap();
    let doc = BoardDocument::load_from(&path);
    let mut session = BoardSession::new(
        CardStore::from_cards(doc.cards),
        DriftEngine::default(),
        DeletePolicy::Confirm,
    );
    let t2 = t1 + MS_PER_DAY;
    session.set_review_mode(true);
    assert_eq!(session.review_due(t2).len(), 1);

    session.select(id);
    assert_eq!(session.keep_selected(&ctx(t2)), Some(id));
    assert!(session.review_due(t2).is_empty());
    let card = session.store().get(id).unwrap();
    assert_eq!(card.zone, Zone::Someday);
    assert_eq!(card.age_zone(t2), Zone::Do);
}
