//! # dmb-consensus
//! Chain parameters and consensus rule selection.
//!
//! Builds one verified [`ParameterSet`] per network, holds them in a
//! [`ParameterRegistry`] with a one-time network selection, and decides
//! which consensus rules (proof-of-work or proof-of-stake) govern a height.

pub mod error;
pub mod genesis;
pub mod params;
pub mod registry;
pub mod seeds;
pub mod transition;
pub mod validation;

pub use error::{ConsensusError, GenesisError, ParamsError, RegistryError};
pub use params::ParameterSet;
pub use registry::ParameterRegistry;
pub use transition::{active_consensus_kind, ConsensusKind, TransitionHeights};
