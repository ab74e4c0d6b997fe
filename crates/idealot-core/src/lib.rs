//! # Idealot Core Library
//!
//! Core logic for Idealot, a single-user "idea parking lot": short text
//! cards drift across three zones (Do / Someday / Forget) based on their
//! age, and can be dragged, pinned, searched, and reviewed. The CLI binary
//! is a thin layer over this library; any GUI would be another.
//!
//! ## Architecture
//!
//! - **Card Store**: the in-memory ordered card collection, mutated only
//!   through explicit operations, with a revision counter for cheap
//!   change detection
//! - **Drift Engine**: a pure tick function stepping eligible cards toward
//!   their age-implied zone anchors; the caller owns the tick schedule
//! - **Board Session**: selection, drag lifecycle, search, and review-mode
//!   interaction over the store
//! - **Storage**: flat-JSON board document and TOML configuration in the
//!   per-user data directory
//!
//! ## Key Components
//!
//! - [`CardStore`]: card collection and operations
//! - [`DriftEngine`]: the drift stepper, [`DriftTicker`] its periodic host
//! - [`BoardSession`]: interaction state machine
//! - [`BoardDocument`]: persistence gateway

pub mod board;
pub mod drift;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;

pub use board::{BoardContext, Card, CardStore, Zone};
pub use drift::{DriftEngine, DriftTicker, DriftTuning, TickOutcome};
pub use error::{CoreError, StorageError, ValidationError};
pub use events::Event;
pub use session::{BoardSession, DeleteOutcome, DeletePolicy};
pub use storage::{data_dir, BoardDocument, Config, SaveOutcome};
