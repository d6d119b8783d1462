//! Genesis block construction and verification.
//!
//! The genesis block holds a single coinbase transaction whose input script
//! is `OP_0 <42> <message>` and whose only output is empty. Its hash and
//! merkle root are checked against hard-coded literals before a parameter
//! set is accepted: a wrong genesis silently forks the node off the network.

use tracing::debug;

use dmb_core::merkle;
use dmb_core::script::ScriptBuilder;
use dmb_core::types::{Block, BlockHeader, Hash256, Transaction, TxIn, TxOut};

use crate::error::GenesisError;

/// Small integer pushed between the zero and the message in the coinbase script.
pub const COINBASE_SCRIPT_NUMBER: i64 = 42;

/// Inputs to the genesis block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisTemplate {
    /// Message embedded in the coinbase script.
    pub coinbase_message: &'static str,
    /// Block and coinbase timestamp.
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
    pub version: i32,
}

/// Known-good literals in reversed hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedGenesis {
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

/// A built genesis block with its derived hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    block: Block,
    hash: Hash256,
    merkle_root: Hash256,
}

impl Genesis {
    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    pub fn merkle_root(&self) -> Hash256 {
        self.merkle_root
    }

    /// Check whether a block is this genesis block by comparing header hashes.
    pub fn is_genesis(&self, block: &Block) -> bool {
        block.header.hash() == self.hash
    }
}

/// Build the genesis coinbase transaction.
fn build_coinbase(template: &GenesisTemplate) -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(0)
        .push_num(COINBASE_SCRIPT_NUMBER)
        .push_slice(template.coinbase_message.as_bytes())
        .into_bytes();

    Transaction {
        version: 1,
        time: template.timestamp,
        inputs: vec![TxIn::coinbase(script_sig)],
        outputs: vec![TxOut::empty()],
        lock_time: 0,
    }
}

/// Build the genesis block without checking it against any literal.
pub fn build_genesis(template: &GenesisTemplate) -> Genesis {
    let coinbase = build_coinbase(template);
    let merkle_root = merkle::merkle_root(&[coinbase.txid()]);

    let block = Block {
        header: BlockHeader {
            version: template.version,
            prev_hash: Hash256::ZERO,
            merkle_root,
            time: template.timestamp,
            bits: template.bits,
            nonce: template.nonce,
        },
        transactions: vec![coinbase],
    };
    let hash = block.header.hash();
    debug!(%hash, %merkle_root, "built genesis block");

    Genesis {
        block,
        hash,
        merkle_root,
    }
}

/// Build the genesis block and verify both derived hashes.
///
/// # Errors
///
/// [`GenesisError::HashMismatch`] or [`GenesisError::MerkleRootMismatch`]
/// naming the literal that failed; [`GenesisError::InvalidLiteral`] if a
/// literal is not valid hex.
pub fn build_verified(template: &GenesisTemplate, expected: &ExpectedGenesis) -> Result<Genesis, GenesisError> {
    let expected_hash = Hash256::from_hex(expected.hash)
        .map_err(|source| GenesisError::InvalidLiteral { which: "hash", source })?;
    let expected_root = Hash256::from_hex(expected.merkle_root)
        .map_err(|source| GenesisError::InvalidLiteral { which: "merkle root", source })?;

    let genesis = build_genesis(template);
    if genesis.hash != expected_hash {
        return Err(GenesisError::HashMismatch {
            expected: expected_hash,
            computed: genesis.hash,
        });
    }
    if genesis.merkle_root != expected_root {
        return Err(GenesisError::MerkleRootMismatch {
            expected: expected_root,
            computed: genesis.merkle_root,
        });
    }
    Ok(genesis)
}
