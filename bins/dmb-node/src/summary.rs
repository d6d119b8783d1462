//! JSON view of a parameter set for `--print-params`.

use std::collections::BTreeMap;

use serde::Serialize;

use dmb_consensus::params::DnsSeed;
use dmb_consensus::ParameterSet;
use dmb_core::address::AddressKind;
use dmb_core::constants::NetworkId;

#[derive(Debug, Serialize)]
pub struct ParamsSummary {
    pub network: NetworkId,
    pub message_magic: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub proof_of_work_limit: String,
    pub genesis_hash: String,
    pub genesis_merkle_root: String,
    pub address_prefixes: BTreeMap<AddressKind, String>,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seed_count: usize,
    pub last_proof_of_work_height: u32,
    pub first_proof_of_stake_height: u32,
    pub max_pool_transactions: u32,
    pub pool_dummy_address: String,
    pub alert_public_key: String,
}

impl From<&ParameterSet> for ParamsSummary {
    fn from(params: &ParameterSet) -> Self {
        Self {
            network: params.network_id(),
            message_magic: hex::encode(params.message_magic()),
            default_port: params.default_port(),
            rpc_port: params.rpc_port(),
            proof_of_work_limit: format!("0x{:0>64}", format!("{:x}", params.proof_of_work_limit())),
            genesis_hash: params.genesis().hash().to_string(),
            genesis_merkle_root: params.genesis().merkle_root().to_string(),
            address_prefixes: params
                .address_prefixes()
                .iter()
                .map(|(kind, prefix)| (kind, hex::encode(prefix)))
                .collect(),
            dns_seeds: params.dns_seeds().to_vec(),
            fixed_seed_count: params.fixed_seeds().len(),
            last_proof_of_work_height: params.last_proof_of_work_height(),
            first_proof_of_stake_height: params.first_proof_of_stake_height(),
            max_pool_transactions: params.max_pool_transactions(),
            pool_dummy_address: params.pool_dummy_address().to_string(),
            alert_public_key: hex::encode(params.alert_public_key()),
        }
    }
}
