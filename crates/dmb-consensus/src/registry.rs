//! Parameter registry with one-time network selection.
//!
//! The registry owns one [`ParameterSet`] per network for the life of the
//! process and records which one is active. Selection happens once during
//! startup, before any consensus code runs:
//!
//! ```text
//! new() ──> built, none active ──select(X)──> active X (terminal)
//! ```
//!
//! Repeating the same selection is harmless. Switching to a different
//! network afterwards is refused, since every cached validation result
//! depends on the active parameters. After selection, [`get`](ParameterRegistry::get)
//! is a lock-free read and the registry can be shared across threads.
//!
//! There is no global instance: construct a registry at startup and pass
//! it to the components that need parameters.

use std::sync::OnceLock;
use tracing::{debug, info, warn};

use dmb_core::constants::NetworkId;

use crate::error::{ParamsError, RegistryError};
use crate::params::ParameterSet;

#[derive(Debug)]
pub struct ParameterRegistry {
    sets: Vec<ParameterSet>,
    /// Index into `sets`, written once.
    active: OnceLock<usize>,
}

impl ParameterRegistry {
    /// Build and verify the mainnet and testnet parameter sets.
    ///
    /// # Errors
    ///
    /// Any [`ParamsError`] from building a set, including genesis mismatches.
    pub fn new() -> Result<Self, ParamsError> {
        Self::from_sets(vec![ParameterSet::mainnet()?, ParameterSet::testnet()?])
    }

    /// Wrap pre-built sets.
    ///
    /// # Errors
    ///
    /// [`ParamsError::DuplicateNetwork`] if two sets share a network id;
    /// [`ParamsError::SharedMagic`] if two sets share message magic bytes,
    /// which would let peers from one network talk to the other.
    pub fn from_sets(sets: Vec<ParameterSet>) -> Result<Self, ParamsError> {
        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                if a.network_id() == b.network_id() {
                    return Err(ParamsError::DuplicateNetwork(a.network_id()));
                }
                if a.message_magic() == b.message_magic() {
                    return Err(ParamsError::SharedMagic(a.network_id(), b.network_id()));
                }
            }
        }
        Ok(Self {
            sets,
            active: OnceLock::new(),
        })
    }

    /// The active parameter set.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotSelected`] if [`select`](Self::select) has not run.
    pub fn get(&self) -> Result<&ParameterSet, RegistryError> {
        self.active
            .get()
            .map(|&i| &self.sets[i])
            .ok_or(RegistryError::NotSelected)
    }

    /// Whether a network has been selected.
    pub fn is_selected(&self) -> bool {
        self.active.get().is_some()
    }

    /// Activate the set for `network`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownNetwork`] if no set exists for `network`;
    /// [`RegistryError::AlreadySelected`] if a different network is active.
    pub fn select(&self, network: NetworkId) -> Result<&ParameterSet, RegistryError> {
        let idx = self
            .sets
            .iter()
            .position(|s| s.network_id() == network)
            .ok_or(RegistryError::UnknownNetwork(network))?;

        let mut first = false;
        let active = *self.active.get_or_init(|| {
            first = true;
            idx
        });

        if active != idx {
            let active = self.sets[active].network_id();
            warn!(%active, requested = %network, "refusing to switch networks after selection");
            return Err(RegistryError::AlreadySelected { active, requested: network });
        }

        let params = &self.sets[idx];
        if first {
            info!(
                %network,
                genesis = %params.genesis().hash(),
                port = params.default_port(),
                "selected chain parameters"
            );
        } else {
            debug!(%network, "network already selected");
        }
        Ok(params)
    }

    /// Select by name (`main`, `mainnet`, `test`, `testnet`).
    pub fn select_by_name(&self, name: &str) -> Result<&ParameterSet, RegistryError> {
        self.select(name.parse()?)
    }

    /// Select testnet when the flag is set, mainnet otherwise.
    pub fn select_from_environment(&self, testnet: bool) -> Result<&ParameterSet, RegistryError> {
        self.select(if testnet { NetworkId::Testnet } else { NetworkId::Main })
    }

    /// A built set by network, regardless of selection.
    pub fn set(&self, network: NetworkId) -> Option<&ParameterSet> {
        self.sets.iter().find(|s| s.network_id() == network)
    }

    /// Networks with a built set, in registration order.
    pub fn networks(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.sets.iter().map(ParameterSet::network_id)
    }
}
