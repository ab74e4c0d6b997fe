use chrono::Utc;
use clap::Subcommand;
use uuid::Uuid;

use idealot_core::{DeleteOutcome, Event, Config};

use super::{board_context, flush_session, load_session};

#[derive(Subcommand)]
pub enum CardAction {
    /// Add a new card (starts in Someday, centered on the board)
    Add { text: String },
    /// List all cards as JSON
    List,
    /// Remove a card
    Remove {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Pin a card, exempting it from drift
    Pin { id: Uuid },
    /// Unpin a card
    Unpin { id: Uuid },
    /// Place a card at a position, as a finished drag would
    Drag { id: Uuid, x: f64, y: f64 },
}

pub fn run(action: CardAction) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let mut session = load_session(&cfg);
    let ctx = board_context(&cfg, None, None);

    match action {
        CardAction::Add { text } => {
            let card = session.store_mut().add(&text, &ctx)?;
            let event = Event::CardAdded {
                id: card.id,
                text: card.text,
                zone: card.zone,
                x: card.x,
                y: card.y,
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        CardAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.store().cards())?
            );
        }
        CardAction::Remove { id, yes } => {
            if !session.select(id) {
                return Err(format!("unknown card: {id}").into());
            }
            match session.delete_selected(yes) {
                DeleteOutcome::Deleted(id) => {
                    let event = Event::CardRemoved { id, at: Utc::now() };
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                DeleteOutcome::NeedsConfirmation => {
                    return Err("deletion requires confirmation; pass --yes".into());
                }
                DeleteOutcome::NothingSelected => unreachable!("card was just selected"),
            }
        }
        CardAction::Pin { id } => set_pin(&mut session, id, true)?,
        CardAction::Unpin { id } => set_pin(&mut session, id, false)?,
        CardAction::Drag { id, x, y } => {
            if !session.drag_start(id) {
                return Err(format!("unknown card: {id}").into());
            }
            let zone = session
                .drag_stop(x, y, &ctx)
                .ok_or("drag did not complete")?;
            let event = Event::CardDragged {
                id,
                x,
                y,
                zone,
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    flush_session(&session);
    Ok(())
}

fn set_pin(
    session: &mut idealot_core::BoardSession,
    id: Uuid,
    pinned: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !session.store_mut().set_pinned(id, pinned) {
        return Err(format!("unknown card: {id}").into());
    }
    let event = Event::CardPinned {
        id,
        pinned,
        at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
