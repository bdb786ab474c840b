use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Error;
use crate::scorecard::RoundRecord;

/// Most-recent-first listing cap, matching what the history view shows.
pub const HISTORY_CAP: usize = 50;

/// Persistence collaborator. The statistics core only ever consumes `list`
/// output; real backends live outside this crate.
pub trait RoundStore {
    /// Most recent first, undated rounds last, capped at [`HISTORY_CAP`].
    fn list(&self, owner: &str) -> Result<Vec<RoundRecord>, Error>;
    fn add(&mut self, owner: &str, round: RoundRecord) -> Result<(), Error>;
    fn delete(&mut self, owner: &str, round_id: &str) -> Result<(), Error>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    rounds: HashMap<String, Vec<RoundRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundStore for InMemoryStore {
    fn list(&self, owner: &str) -> Result<Vec<RoundRecord>, Error> {
        let rounds = self
            .rounds
            .get(owner)
            .into_iter()
            .flatten()
            .cloned()
            .sorted_by(|a, b| b.timestamp.cmp(&a.timestamp))
            .take(HISTORY_CAP)
            .collect_vec();
        Ok(rounds)
    }

    fn add(&mut self, owner: &str, round: RoundRecord) -> Result<(), Error> {
        self.rounds.entry(owner.to_string()).or_default().push(round);
        Ok(())
    }

    fn delete(&mut self, owner: &str, round_id: &str) -> Result<(), Error> {
        let rounds = self
            .rounds
            .get_mut(owner)
            .ok_or_else(|| Error::RoundNotFound(round_id.to_string()))?;
        let before = rounds.len();
        rounds.retain(|round| round.id != round_id);
        if rounds.len() == before {
            return Err(Error::RoundNotFound(round_id.to_string()));
        }
        Ok(())
    }
}
