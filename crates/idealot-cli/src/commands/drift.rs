use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use clap::Subcommand;

use idealot_core::{Config, DriftTicker, Event, TickOutcome};

use super::{board_context, flush_session, load_session};

#[derive(Subcommand)]
pub enum DriftAction {
    /// Run a number of synchronous drift ticks and save the board
    Tick {
        #[arg(long, default_value = "1")]
        count: u32,
        /// Board width override (defaults from config)
        #[arg(long)]
        width: Option<f64>,
        /// Board height override (defaults from config)
        #[arg(long)]
        height: Option<f64>,
    },
    /// Run the periodic drift ticker for a bounded time, then stop it
    Run {
        #[arg(long, default_value = "5")]
        seconds: u64,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
}

pub fn run(action: DriftAction) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();

    match action {
        DriftAction::Tick {
            count,
            width,
            height,
        } => {
            let mut session = load_session(&cfg);
            let mut total = TickOutcome::default();
            for _ in 0..count {
                let ctx = board_context(&cfg, width, height);
                total.merge(session.drift_tick(&ctx));
            }
            let event = Event::DriftTicked {
                ticks: count,
                moved: total.moved,
                reclassified: total.reclassified,
                revision: session.store().revision(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
            flush_session(&session);
        }
        DriftAction::Run {
            seconds,
            width,
            height,
        } => {
            let ctx = board_context(&cfg, width, height);
            let session = Arc::new(Mutex::new(load_session(&cfg)));
            let before = session
                .lock()
                .map_err(|_| "board session mutex poisoned")?
                .store()
                .revision();

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let ticker = DriftTicker::spawn(session.clone(), ctx.width, ctx.height);
                tokio::time::sleep(Duration::from_secs(seconds)).await;
                ticker.stop().await;
            });

            let session = Arc::try_unwrap(session)
                .map_err(|_| "drift ticker still holds the session")?
                .into_inner()
                .map_err(|_| "board session mutex poisoned")?;
            log::info!(
                "drift run finished, board changed: {}",
                session.store().revision() != before
            );
            let cards = session.store().cards();
            let count = |zone: idealot_core::Zone| cards.iter().filter(|c| c.zone == zone).count();
            let event = Event::BoardSnapshot {
                total: cards.len(),
                do_count: count(idealot_core::Zone::Do),
                someday_count: count(idealot_core::Zone::Someday),
                forget_count: count(idealot_core::Zone::Forget),
                pinned_count: cards.iter().filter(|c| c.pinned).count(),
                revision: session.store().revision(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
            flush_session(&session);
        }
    }

    Ok(())
}
