use chrono::Utc;
use clap::Subcommand;

use idealot_core::{Config, Event, Zone};

use super::load_session;

#[derive(Subcommand)]
pub enum BoardAction {
    /// Print a board snapshot with per-zone counts
    Status,
    /// List cards whose text contains the query (case-insensitive)
    Search { query: String },
}

pub fn run(action: BoardAction) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let mut session = load_session(&cfg);

    match action {
        BoardAction::Status => {
            let cards = session.store().cards();
            let count = |zone: Zone| cards.iter().filter(|c| c.zone == zone).count();
            let event = Event::BoardSnapshot {
                total: cards.len(),
                do_count: count(Zone::Do),
                someday_count: count(Zone::Someday),
                forget_count: count(Zone::Forget),
                pinned_count: cards.iter().filter(|c| c.pinned).count(),
                revision: session.store().revision(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        BoardAction::Search { query } => {
            session.set_search(Some(query));
            println!(
                "{}",
                serde_json::to_string_pretty(&session.visible_cards())?
            );
        }
    }

    Ok(())
}
