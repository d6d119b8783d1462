//! Header checks against the active parameter set.
//!
//! These are the parameter-dependent checks only. Stake kernel, signature,
//! and transaction validation belong to the validation engine that calls in.

use dmb_core::error::TargetError;
use dmb_core::target::{check_proof_of_work, decode_compact};
use dmb_core::types::{BlockHeader, Hash256};

use crate::error::ConsensusError;
use crate::params::ParameterSet;
use crate::transition::ConsensusKind;

/// Check `header` at `height` and return the rules it was checked under.
///
/// - Height 0 must be the network's genesis block.
/// - Heights with ambiguous rules are rejected.
/// - Proof-of-work heights need a target within the limit and a hash that
///   meets it.
/// - Proof-of-stake heights need a well-formed, non-zero target.
pub fn check_header(
    header: &BlockHeader,
    height: u32,
    params: &ParameterSet,
) -> Result<ConsensusKind, ConsensusError> {
    let hash = header.hash();

    if height == 0 {
        let expected = params.genesis().hash();
        if hash != expected {
            return Err(ConsensusError::GenesisMismatch { expected, got: hash });
        }
        return params.transition().require_kind_at(0);
    }

    let kind = params.transition().require_kind_at(height)?;
    if kind == ConsensusKind::ProofOfWork {
        check_proof_of_work(&hash, header.bits, params.proof_of_work_limit())
            .map_err(ConsensusError::ProofOfWork)?;
    } else {
        let target = decode_compact(header.bits).map_err(ConsensusError::StakeTarget)?;
        if target.is_zero() {
            return Err(ConsensusError::StakeTarget(TargetError::Zero));
        }
    }
    Ok(kind)
}

/// Check that a stored chain starts at this network's genesis block.
///
/// # Errors
///
/// [`ConsensusError::IncompatibleChain`] if the stored genesis differs. The
/// node must not open that chain data.
pub fn check_genesis_compat(stored_genesis: &Hash256, params: &ParameterSet) -> Result<(), ConsensusError> {
    let expected = params.genesis().hash();
    if *stored_genesis != expected {
        return Err(ConsensusError::IncompatibleChain {
            expected,
            found: *stored_genesis,
        });
    }
    Ok(())
}
