//! Fetch orchestration.
//!
//! `store` owns the per-series state map and the round counter; `orchestrator`
//! drives one sequential pass over the catalog per time-range selection.

pub mod orchestrator;
pub mod store;

pub use orchestrator::{FetchRound, StepOutcome};
pub use store::{RoundId, SeriesStore};
