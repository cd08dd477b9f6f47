//! Per-series state store with stale-round write protection.
//!
//! The store is only ever written from one logical fetch sequence, so there is
//! no locking. Overlapping rounds are handled by tagging: every round gets a
//! monotonically increasing id, and a write is applied only if its round id is
//! still current. A superseded round's late result is simply discarded.

use std::collections::BTreeMap;

use crate::data::FetchError;
use crate::domain::{Indicator, Observation, SeriesState};

pub type RoundId = u64;

#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    states: BTreeMap<Indicator, SeriesState>,
    round: RoundId,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch round.
    ///
    /// Bumps the round id and resets every catalog entry to loading before any
    /// request is issued, so a reader never observes a missing entry mid-round.
    pub fn begin_round(&mut self) -> RoundId {
        self.round += 1;
        for indicator in Indicator::ALL {
            self.states.insert(indicator, SeriesState::loading());
        }
        self.round
    }

    pub fn current_round(&self) -> RoundId {
        self.round
    }

    /// Apply one series outcome, if `round` is still the current round.
    ///
    /// An entry is always either ready with data or failed with a message,
    /// never ready-and-empty; `SeriesState::ready` turns an observation-free
    /// success into the no-data failure. Returns whether the write landed.
    pub fn apply(
        &mut self,
        round: RoundId,
        indicator: Indicator,
        outcome: Result<Vec<Observation>, FetchError>,
    ) -> bool {
        if round != self.round {
            return false;
        }

        let state = match outcome {
            Ok(data) => SeriesState::ready(data),
            Err(err) => SeriesState::failed(err.to_string()),
        };
        self.states.insert(indicator, state);
        true
    }

    pub fn get(&self, indicator: Indicator) -> Option<&SeriesState> {
        self.states.get(&indicator)
    }

    /// Entries in catalog order (the enum's variant order).
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &SeriesState)> {
        self.states.iter().map(|(k, v)| (*k, v))
    }

    pub fn loading_count(&self) -> usize {
        self.states.values().filter(|s| s.is_loading).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(day: u32) -> Observation {
        Observation::new(NaiveDate::from_ymd_opt(2025, 1, day).unwrap(), "1.0")
    }

    #[test]
    fn begin_round_initializes_every_entry_to_loading() {
        let mut store = SeriesStore::new();
        assert_eq!(store.iter().count(), 0);

        store.begin_round();
        assert_eq!(store.iter().count(), Indicator::ALL.len());
        assert_eq!(store.loading_count(), Indicator::ALL.len());
    }

    #[test]
    fn begin_round_resets_settled_entries() {
        let mut store = SeriesStore::new();
        let round = store.begin_round();
        store.apply(round, Indicator::Gdp, Ok(vec![obs(1)]));
        store.apply(round, Indicator::Bitcoin, Err(FetchError::Empty));

        store.begin_round();
        assert_eq!(store.loading_count(), Indicator::ALL.len());
        assert!(store.get(Indicator::Gdp).unwrap().data.is_empty());
    }

    #[test]
    fn apply_settles_exactly_one_of_data_or_error() {
        let mut store = SeriesStore::new();
        let round = store.begin_round();

        store.apply(round, Indicator::Gdp, Ok(vec![obs(1), obs(2)]));
        store.apply(
            round,
            Indicator::Sp500,
            Err(FetchError::Upstream {
                status: 500,
                message: None,
            }),
        );

        let ok = store.get(Indicator::Gdp).unwrap();
        assert!(!ok.data.is_empty() && ok.error.is_none());

        let bad = store.get(Indicator::Sp500).unwrap();
        assert!(bad.data.is_empty() && bad.error.is_some());
    }

    #[test]
    fn apply_empty_success_becomes_no_data_error() {
        let mut store = SeriesStore::new();
        let round = store.begin_round();
        store.apply(round, Indicator::Inflation, Ok(Vec::new()));

        let state = store.get(Indicator::Inflation).unwrap();
        assert!(state.data.is_empty());
        assert_eq!(state.error.as_deref(), Some(crate::domain::NO_DATA_ERROR));
    }

    #[test]
    fn stale_round_writes_are_discarded() {
        let mut store = SeriesStore::new();
        let old = store.begin_round();
        let current = store.begin_round();
        assert!(current > old);

        assert!(!store.apply(old, Indicator::Gdp, Ok(vec![obs(1)])));
        assert!(store.get(Indicator::Gdp).unwrap().is_loading);

        assert!(store.apply(current, Indicator::Gdp, Ok(vec![obs(1)])));
        assert!(store.get(Indicator::Gdp).unwrap().is_ready());
    }

    #[test]
    fn iter_follows_catalog_order() {
        let mut store = SeriesStore::new();
        store.begin_round();
        let order: Vec<Indicator> = store.iter().map(|(i, _)| i).collect();
        assert_eq!(order, Indicator::ALL.to_vec());
    }
}
