//! Per-network parameter sets.
//!
//! Each network is described by a plain [`NetworkDefinition`] value built by
//! [`mainnet_definition`] or [`testnet_definition`]. [`ParameterSet::build`]
//! turns a definition into an immutable, verified parameter set: the genesis
//! block is rebuilt and checked against its literals, address prefixes are
//! checked for ambiguity, and fixed seeds are converted.
//!
//! Magic bytes, ports, and address prefixes are wire-format constants shared
//! with the deployed network and must not change.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

use dmb_core::address::{AddressKind, AddressPrefixes};
use dmb_core::constants::NetworkId;

use crate::error::ParamsError;
use crate::genesis::{self, ExpectedGenesis, Genesis, GenesisTemplate};
use crate::seeds::{self, SeedAddress, MAINNET_SEEDS, TESTNET_SEEDS};
use crate::transition::TransitionHeights;

/// Verification key for out-of-band alert messages (uncompressed secp256k1).
pub const ALERT_PUBLIC_KEY_HEX: &str = "04cc24ab003c828cdd9cf4db2ebbde8e1cecb3bbfa8b3127fcb9dd9b84d44112080827ed7c49a648af9fe788ff42e316aee665879c553f099e55299d6b54edd7e0";

/// Message embedded in the genesis coinbase.
pub const GENESIS_MESSAGE: &str = "And we start all over again";
pub const GENESIS_TIMESTAMP: u32 = 1_523_899_453;
pub const GENESIS_BITS: u32 = 520_339_231;
pub const GENESIS_NONCE: u32 = 35_317;
pub const GENESIS_HASH: &str = "3f4ce71618777f85a62fcba786e80273b1bc0224a851d59f3ff086200c61f145";
pub const GENESIS_MERKLE_ROOT: &str = "ef64b62464a3c7b63786119bccbb6a584e69107761049f160216c3b3e05a6c5c";

/// Collateral address used as a placeholder in coin-mixing pools.
pub const POOL_DUMMY_ADDRESS: &str = "D7FBJNGDmEsU5wx2m3xw85N8kRgCqA8S7L";

/// Number of numbered DNS seeds operated for mainnet.
const MAINNET_DNS_SEED_COUNT: u32 = 25;

/// The easiest target allowed on both networks: `2^240 - 1`.
pub fn default_proof_of_work_limit() -> U256 {
    U256::MAX >> 16u32
}

/// A DNS seed used for peer discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }
}

/// Unverified description of a network.
#[derive(Debug, Clone)]
pub struct NetworkDefinition {
    pub network_id: NetworkId,
    pub message_magic: [u8; 4],
    pub alert_public_key_hex: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    pub proof_of_work_limit: U256,
    pub genesis: GenesisTemplate,
    pub expected_genesis: ExpectedGenesis,
    pub address_prefixes: Vec<(AddressKind, Vec<u8>)>,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seed_table: &'static [u32],
    pub transition: TransitionHeights,
    pub max_pool_transactions: u32,
    pub pool_dummy_address: &'static str,
    /// Subdirectory appended to the base data directory. Empty for mainnet.
    pub data_dir_suffix: &'static str,
}

fn shared_genesis() -> (GenesisTemplate, ExpectedGenesis) {
    (
        GenesisTemplate {
            coinbase_message: GENESIS_MESSAGE,
            timestamp: GENESIS_TIMESTAMP,
            bits: GENESIS_BITS,
            nonce: GENESIS_NONCE,
            version: 1,
        },
        ExpectedGenesis {
            hash: GENESIS_HASH,
            merkle_root: GENESIS_MERKLE_ROOT,
        },
    )
}

/// Mainnet constants.
pub fn mainnet_definition() -> NetworkDefinition {
    let (genesis, expected_genesis) = shared_genesis();
    let dns_seeds = (1..=MAINNET_DNS_SEED_COUNT)
        .map(|i| DnsSeed::new(format!("seed{i:03}"), format!("seed{i:03}.digitalmoneybits.org")))
        .collect();

    NetworkDefinition {
        network_id: NetworkId::Main,
        // Rarely used upper ASCII, invalid as UTF-8, a large 4-byte int at any alignment.
        message_magic: [0xf1, 0x2f, 0xfe, 0xef],
        alert_public_key_hex: ALERT_PUBLIC_KEY_HEX,
        default_port: 35097,
        rpc_port: 35098,
        proof_of_work_limit: default_proof_of_work_limit(),
        genesis,
        expected_genesis,
        address_prefixes: vec![
            (AddressKind::PubkeyAddress, vec![137]),
            (AddressKind::ScriptAddress, vec![85]),
            (AddressKind::SecretKey, vec![153]),
            (AddressKind::StealthAddress, vec![40]),
            (AddressKind::ExtPublicKey, vec![0x04, 0x88, 0xB2, 0x1E]),
            (AddressKind::ExtSecretKey, vec![0x04, 0x88, 0xAD, 0xE4]),
        ],
        dns_seeds,
        fixed_seed_table: MAINNET_SEEDS,
        transition: TransitionHeights::new(10_000, 9_000),
        max_pool_transactions: 3,
        pool_dummy_address: POOL_DUMMY_ADDRESS,
        data_dir_suffix: "",
    }
}

/// Testnet constants. Shares the mainnet genesis block and alert key.
pub fn testnet_definition() -> NetworkDefinition {
    let (genesis, expected_genesis) = shared_genesis();

    NetworkDefinition {
        network_id: NetworkId::Testnet,
        message_magic: [0x2e, 0xea, 0x4e, 0xee],
        alert_public_key_hex: ALERT_PUBLIC_KEY_HEX,
        default_port: 32097,
        rpc_port: 32098,
        proof_of_work_limit: default_proof_of_work_limit(),
        genesis,
        expected_genesis,
        address_prefixes: vec![
            (AddressKind::PubkeyAddress, vec![75]),
            (AddressKind::ScriptAddress, vec![196]),
            (AddressKind::SecretKey, vec![239]),
            (AddressKind::StealthAddress, vec![40]),
            (AddressKind::ExtPublicKey, vec![0x04, 0x35, 0x87, 0xCF]),
            (AddressKind::ExtSecretKey, vec![0x04, 0x35, 0x83, 0x94]),
        ],
        dns_seeds: Vec::new(),
        fixed_seed_table: TESTNET_SEEDS,
        transition: TransitionHeights::new(0x7fff_ffff, 9_000),
        max_pool_transactions: 3,
        pool_dummy_address: POOL_DUMMY_ADDRESS,
        data_dir_suffix: "testnet",
    }
}

/// Immutable consensus and network constants for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    network_id: NetworkId,
    message_magic: [u8; 4],
    alert_public_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    proof_of_work_limit: U256,
    genesis: Genesis,
    address_prefixes: AddressPrefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<SeedAddress>,
    transition: TransitionHeights,
    max_pool_transactions: u32,
    pool_dummy_address: &'static str,
    data_dir_suffix: &'static str,
}

impl ParameterSet {
    /// Verify a definition and build its parameter set.
    ///
    /// # Errors
    ///
    /// Any [`ParamsError`]; a genesis literal mismatch is reported as
    /// [`ParamsError::Genesis`] and must abort startup.
    pub fn build(def: NetworkDefinition) -> Result<Self, ParamsError> {
        let network = def.network_id;

        let genesis = genesis::build_verified(&def.genesis, &def.expected_genesis)
            .map_err(|source| ParamsError::Genesis { network, source })?;

        let alert_public_key = hex::decode(def.alert_public_key_hex)
            .map_err(|e| ParamsError::InvalidAlertKey { network, reason: e.to_string() })?;
        if alert_public_key.is_empty() {
            return Err(ParamsError::InvalidAlertKey { network, reason: "empty key".into() });
        }

        let address_prefixes = AddressPrefixes::new(def.address_prefixes)
            .map_err(|source| ParamsError::AddressPrefixes { network, source })?;

        if def.default_port == def.rpc_port {
            return Err(ParamsError::PortClash { network, port: def.rpc_port });
        }
        if def.max_pool_transactions == 0 {
            return Err(ParamsError::ZeroPoolSize(network));
        }

        if let Some(overlap) = def.transition.overlap() {
            debug!(%network, ?overlap, "PoW and PoS heights overlap; blocks there are rejected");
        }
        if let Some(gap) = def.transition.gap() {
            debug!(%network, ?gap, "gap between PoW and PoS heights; blocks there are rejected");
        }

        let fixed_seeds = seeds::convert_seeds_now(def.fixed_seed_table, def.default_port);

        debug!(%network, genesis = %genesis.hash(), "built parameter set");
        Ok(Self {
            network_id: network,
            message_magic: def.message_magic,
            alert_public_key,
            default_port: def.default_port,
            rpc_port: def.rpc_port,
            proof_of_work_limit: def.proof_of_work_limit,
            genesis,
            address_prefixes,
            dns_seeds: def.dns_seeds,
            fixed_seeds,
            transition: def.transition,
            max_pool_transactions: def.max_pool_transactions,
            pool_dummy_address: def.pool_dummy_address,
            data_dir_suffix: def.data_dir_suffix,
        })
    }

    pub fn mainnet() -> Result<Self, ParamsError> {
        Self::build(mainnet_definition())
    }

    pub fn testnet() -> Result<Self, ParamsError> {
        Self::build(testnet_definition())
    }

    /// Build the set for `network`.
    pub fn for_network(network: NetworkId) -> Result<Self, ParamsError> {
        match network {
            NetworkId::Main => Self::mainnet(),
            NetworkId::Testnet => Self::testnet(),
        }
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Four bytes prepended to every P2P message.
    pub fn message_magic(&self) -> [u8; 4] {
        self.message_magic
    }

    pub fn alert_public_key(&self) -> &[u8] {
        &self.alert_public_key
    }

    /// Default TCP port for P2P connections.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default TCP port for the JSON-RPC server.
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest target a block may claim.
    pub fn proof_of_work_limit(&self) -> U256 {
        self.proof_of_work_limit
    }

    pub fn genesis(&self) -> &Genesis {
        &self.genesis
    }

    pub fn address_prefixes(&self) -> &AddressPrefixes {
        &self.address_prefixes
    }

    /// Prefix bytes for one address kind.
    pub fn address_prefix(&self, kind: AddressKind) -> &[u8] {
        self.address_prefixes.get(kind)
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    pub fn transition(&self) -> TransitionHeights {
        self.transition
    }

    pub fn last_proof_of_work_height(&self) -> u32 {
        self.transition.last_proof_of_work
    }

    pub fn first_proof_of_stake_height(&self) -> u32 {
        self.transition.first_proof_of_stake
    }

    /// Upper bound on coin-mixing pool size.
    pub fn max_pool_transactions(&self) -> u32 {
        self.max_pool_transactions
    }

    /// Placeholder collateral address for coin-mixing pools.
    pub fn pool_dummy_address(&self) -> &'static str {
        self.pool_dummy_address
    }

    pub fn data_dir_suffix(&self) -> &'static str {
        self.data_dir_suffix
    }
}
