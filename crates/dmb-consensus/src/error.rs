//! Error types for parameter construction, network selection, and header checks.
use thiserror::Error;

use dmb_core::constants::NetworkId;
use dmb_core::error::{AddressError, HashParseError, NetworkIdError, TargetError};
use dmb_core::types::Hash256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("malformed {which} literal: {source}")] InvalidLiteral { which: &'static str, source: HashParseError },
    #[error("genesis hash mismatch: expected {expected}, computed {computed}")] HashMismatch { expected: Hash256, computed: Hash256 },
    #[error("genesis merkle root mismatch: expected {expected}, computed {computed}")] MerkleRootMismatch { expected: Hash256, computed: Hash256 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{network}: {source}")] Genesis { network: NetworkId, source: GenesisError },
    #[error("{network}: invalid alert public key: {reason}")] InvalidAlertKey { network: NetworkId, reason: String },
    #[error("{network}: {source}")] AddressPrefixes { network: NetworkId, source: AddressError },
    #[error("{network}: p2p and rpc both use port {port}")] PortClash { network: NetworkId, port: u16 },
    #[error("{0}: max pool transactions must be positive")] ZeroPoolSize(NetworkId),
    #[error("duplicate parameter set for {0}")] DuplicateNetwork(NetworkId),
    #[error("{0} and {1} share message magic bytes")] SharedMagic(NetworkId, NetworkId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no network selected")] NotSelected,
    #[error("no parameter set for {0}")] UnknownNetwork(NetworkId),
    #[error(transparent)] InvalidName(#[from] NetworkIdError),
    #[error("network already selected: active {active}, requested {requested}")] AlreadySelected { active: NetworkId, requested: NetworkId },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("ambiguous consensus rules at height {height} (last PoW {last_proof_of_work}, first PoS {first_proof_of_stake})")]
    Ambiguous { height: u32, last_proof_of_work: u32, first_proof_of_stake: u32 },
    #[error("block at height 0 is not the genesis block: expected {expected}, got {got}")] GenesisMismatch { expected: Hash256, got: Hash256 },
    #[error("invalid proof-of-work: {0}")] ProofOfWork(TargetError),
    #[error("invalid proof-of-stake target: {0}")] StakeTarget(TargetError),
    #[error("incompatible chain: stored genesis {found}, expected {expected}")] IncompatibleChain { expected: Hash256, found: Hash256 },
}
