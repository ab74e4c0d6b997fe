mod engine;
mod ticker;

pub use engine::{DriftEngine, DriftTuning, TickOutcome};
pub use ticker::DriftTicker;
