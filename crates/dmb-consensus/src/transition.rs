//! Height-based transition from proof-of-work to proof-of-stake rules.
//!
//! A height is governed by proof-of-work while it is at or below the last
//! proof-of-work height, and by proof-of-stake from the first proof-of-stake
//! height on. The two thresholds are configured independently. Heights where
//! both rules apply (overlap) or neither does (gap) are [`ConsensusKind::Ambiguous`]
//! and blocks there must be rejected; no precedence rule is applied.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::ConsensusError;
use crate::params::ParameterSet;

/// Which consensus rules a block at a given height must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsensusKind {
    ProofOfWork,
    ProofOfStake,
    /// Both or neither rule set applies. Blocks here are invalid.
    Ambiguous,
}

/// The pair of thresholds bounding the rule transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionHeights {
    pub last_proof_of_work: u32,
    pub first_proof_of_stake: u32,
}

impl TransitionHeights {
    pub const fn new(last_proof_of_work: u32, first_proof_of_stake: u32) -> Self {
        Self {
            last_proof_of_work,
            first_proof_of_stake,
        }
    }

    /// Consensus kind at `height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmb_consensus::{ConsensusKind, TransitionHeights};
    /// let t = TransitionHeights::new(10_000, 9_000);
    /// assert_eq!(t.kind_at(5_000), ConsensusKind::ProofOfWork);
    /// assert_eq!(t.kind_at(9_500), ConsensusKind::Ambiguous);
    /// assert_eq!(t.kind_at(50_000), ConsensusKind::ProofOfStake);
    /// ```
    pub fn kind_at(&self, height: u32) -> ConsensusKind {
        let pow = height <= self.last_proof_of_work;
        let pos = height >= self.first_proof_of_stake;
        match (pow, pos) {
            (true, false) => ConsensusKind::ProofOfWork,
            (false, true) => ConsensusKind::ProofOfStake,
            _ => ConsensusKind::Ambiguous,
        }
    }

    /// Heights where both rule sets apply.
    pub fn overlap(&self) -> Option<RangeInclusive<u32>> {
        (self.first_proof_of_stake <= self.last_proof_of_work)
            .then(|| self.first_proof_of_stake..=self.last_proof_of_work)
    }

    /// Heights where neither rule set applies.
    pub fn gap(&self) -> Option<RangeInclusive<u32>> {
        let after_pow = self.last_proof_of_work.checked_add(1)?;
        (after_pow < self.first_proof_of_stake).then(|| after_pow..=self.first_proof_of_stake - 1)
    }

    /// Like [`kind_at`](Self::kind_at) but reports the ambiguous case as an error.
    pub fn require_kind_at(&self, height: u32) -> Result<ConsensusKind, ConsensusError> {
        match self.kind_at(height) {
            ConsensusKind::Ambiguous => Err(ConsensusError::Ambiguous {
                height,
                last_proof_of_work: self.last_proof_of_work,
                first_proof_of_stake: self.first_proof_of_stake,
            }),
            kind => Ok(kind),
        }
    }
}

/// Consensus kind for a block at `height` under `params`.
pub fn active_consensus_kind(height: u32, params: &ParameterSet) -> ConsensusKind {
    params.transition().kind_at(height)
}

/// Consensus kind for `height`, rejecting the ambiguous case.
///
/// # Errors
///
/// [`ConsensusError::Ambiguous`] when the height falls in an overlap or gap.
pub fn require_consensus_kind(height: u32, params: &ParameterSet) -> Result<ConsensusKind, ConsensusError> {
    params.transition().require_kind_at(height)
}
