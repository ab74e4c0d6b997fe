pub mod board;
pub mod card;
pub mod config;
pub mod drift;
pub mod review;

use idealot_core::{
    BoardContext, BoardDocument, BoardSession, CardStore, Config, DriftEngine,
};

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// The wall clock enters the core only here, as explicit context.
pub(crate) fn board_context(cfg: &Config, width: Option<f64>, height: Option<f64>) -> BoardContext {
    BoardContext::new(
        now_ms(),
        width.unwrap_or(cfg.board.width),
        height.unwrap_or(cfg.board.height),
    )
}

pub(crate) fn load_session(cfg: &Config) -> BoardSession {
    let doc = BoardDocument::load();
    BoardSession::new(
        CardStore::from_cards(doc.cards),
        DriftEngine::new(cfg.drift.clone()),
        cfg.review.delete_policy,
    )
}

/// Fire-and-forget persistence: failures are logged inside the gateway and
/// never interrupt the command.
pub(crate) fn flush_session(session: &BoardSession) {
    let doc = BoardDocument {
        cards: session.store().cards().to_vec(),
    };
    let _ = doc.flush();
}
