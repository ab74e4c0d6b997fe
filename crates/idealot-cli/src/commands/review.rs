use chrono::Utc;
use clap::Subcommand;
use uuid::Uuid;

use idealot_core::{Config, DeleteOutcome, Event};

use super::{board_context, flush_session, load_session, now_ms};

#[derive(Subcommand)]
pub enum ReviewAction {
    /// List cards due for review (older than 14 days)
    List,
    /// Keep a card: reset its age so it re-enters the drift cycle
    Keep { id: Uuid },
    /// Delete a card from review
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: ReviewAction) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let mut session = load_session(&cfg);
    session.set_review_mode(true);

    match action {
        ReviewAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(&session.review_due(now_ms()))?
            );
        }
        ReviewAction::Keep { id } => {
            if !session.select(id) {
                return Err(format!("unknown card: {id}").into());
            }
            let ctx = board_context(&cfg, None, None);
            session
                .keep_selected(&ctx)
                .ok_or_else(|| format!("unknown card: {id}"))?;
            let event = Event::CardKept { id, at: Utc::now() };
            println!("{}", serde_json::to_string_pretty(&event)?);
            flush_session(&session);
        }
        ReviewAction::Delete { id, yes } => {
            if !session.select(id) {
                return Err(format!("unknown card: {id}").into());
            }
            match session.delete_selected(yes) {
                DeleteOutcome::Deleted(id) => {
                    let event = Event::CardRemoved { id, at: Utc::now() };
                    println!("{}", serde_json::to_string_pretty(&event)?);
                    flush_session(&session);
                }
                DeleteOutcome::NeedsConfirmation => {
                    return Err("deletion requires confirmation; pass --yes".into());
                }
                DeleteOutcome::NothingSelected => unreachable!("card was just selected"),
            }
        }
    }

    Ok(())
}
