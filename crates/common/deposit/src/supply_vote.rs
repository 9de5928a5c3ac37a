use crate::{
    constants::{MAX_SUPPLY_VOTE, SUPPLY_VOTE_OPTIONS},
    error::DepositError,
};

/// Running count of accepted deposits per supply vote value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SupplyVoteTally {
    votes: [u64; SUPPLY_VOTE_OPTIONS],
    total: u64,
}

impl Default for SupplyVoteTally {
    fn default() -> Self {
        Self {
            votes: [0; SUPPLY_VOTE_OPTIONS],
            total: 0,
        }
    }
}

impl SupplyVoteTally {
    pub fn validate(vote: u8) -> Result<(), DepositError> {
        if vote > MAX_SUPPLY_VOTE {
            return Err(DepositError::InvalidVote(vote));
        }
        Ok(())
    }

    /// Callers validate first, an out of range vote here is a logic error.
    pub(crate) fn record(&mut self, vote: u8) {
        self.votes[vote as usize] += 1;
        self.total += 1;
    }

    pub fn votes(&self) -> &[u64; SUPPLY_VOTE_OPTIONS] {
        &self.votes
    }

    pub fn get(&self, vote: u8) -> u64 {
        self.votes.get(vote as usize).copied().unwrap_or_default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
