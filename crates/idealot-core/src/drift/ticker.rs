//! Cancellable periodic drift task.
//!
//! The ticker owns the tick loop so the simulation has an explicit
//! start/stop lifecycle instead of a free-running timer. A single task
//! awaits each tick before sleeping again, so at most one tick is ever in
//! flight. The session is behind a mutex because ticks and user commands
//! run on different execution contexts.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::board::BoardContext;
use crate::session::BoardSession;

pub struct DriftTicker {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl DriftTicker {
    /// Spawn the periodic drift task against a shared session.
    ///
    /// `width`/`height` are the board dimensions used for every tick; the
    /// tick period comes from the session's drift tuning. Must be called
    /// from within a tokio runtime.
    pub fn spawn(session: Arc<Mutex<BoardSession>>, width: f64, height: f64) -> Self {
        let tick_ms = session
            .lock()
            .map(|s| s.engine().tuning().tick_ms)
            .unwrap_or(50)
            .max(1);
        let (shutdown, mut rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_millis(tick_ms));
            // A late tick must not cause a burst of catch-up ticks.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let ctx = BoardContext::new(now_ms(), width, height);
                        let Ok(mut session) = session.lock() else {
                            log::warn!("board session mutex poisoned, stopping drift ticker");
                            break;
                        };
                        let outcome = session.drift_tick(&ctx);
                        if !outcome.is_noop() {
                            log::debug!(
                                "drift tick moved {} card(s), reclassified {}",
                                outcome.moved,
                                outcome.reclassified
                            );
                        }
                    }
                    changed = rx.changed() => {
                        if changed.is_err() || *rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        Self { handle, shutdown }
    }

    /// Stop the ticker and wait for the in-flight tick, if any, to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
