//! Sequential fetch rounds over the indicator catalog.
//!
//! A round is one complete pass over all configured series, triggered by a
//! time-range change (or an explicit refresh). Requests run strictly one at a
//! time: each outcome is applied to the store before the next request starts,
//! so a single series failing never disturbs another series' request or state.

use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::data::{FetchError, SeriesSource};
use crate::domain::{Indicator, TimeRange};
use crate::fetch::store::{RoundId, SeriesStore};

/// Outcome of one orchestrator step, surfaced as a non-blocking notice.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub indicator: Indicator,
    /// Stored error message, when the fetch failed.
    pub error: Option<String>,
    /// False when the store rejected the write because the round went stale.
    pub applied: bool,
}

/// One full pass over the catalog for a given time range.
///
/// The TUI advances the round from the idle arm of its event loop so the
/// screen repaints between requests; the `show` command drains it in one go
/// with [`FetchRound::run_to_completion`].
#[derive(Debug)]
pub struct FetchRound {
    round: RoundId,
    start_date: NaiveDate,
    queue: VecDeque<Indicator>,
}

impl FetchRound {
    /// Begin a round: resolve the start date and mark every catalog entry as
    /// loading before any request is issued.
    pub fn begin(store: &mut SeriesStore, range: TimeRange, today: NaiveDate) -> Self {
        let round = store.begin_round();
        Self {
            round,
            start_date: range.start_date(today),
            queue: Indicator::ALL.into_iter().collect(),
        }
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Fetch the next series and apply its outcome.
    ///
    /// Returns `None` once the round is drained. Failures settle the entry and
    /// move on; they never halt the queue.
    pub fn step<S: SeriesSource>(
        &mut self,
        source: &S,
        store: &mut SeriesStore,
    ) -> Option<StepOutcome> {
        let indicator = self.queue.pop_front()?;

        let outcome = source
            .fetch_observations(indicator.series_id(), self.start_date)
            .and_then(|data| {
                if data.is_empty() {
                    Err(FetchError::Empty)
                } else {
                    Ok(data)
                }
            });

        let error = outcome.as_ref().err().map(|e| e.to_string());
        let applied = store.apply(self.round, indicator, outcome);

        Some(StepOutcome {
            indicator,
            error,
            applied,
        })
    }

    /// Drain the round, collecting every step outcome.
    pub fn run_to_completion<S: SeriesSource>(
        mut self,
        source: &S,
        store: &mut SeriesStore,
    ) -> Vec<StepOutcome> {
        let mut outcomes = Vec::with_capacity(self.remaining());
        while let Some(outcome) = self.step(source, store) {
            outcomes.push(outcome);
        }
        outcomes
    }
}
