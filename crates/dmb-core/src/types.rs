//! Core protocol types: transactions, blocks, and their consensus encodings.
//!
//! Transactions carry a timestamp (`time`) alongside the version, as
//! required by the proof-of-stake rules. Headers serialize to exactly
//! [`HEADER_SIZE`] bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::HEADER_SIZE;
use crate::encode::{write_var_bytes, write_vec, Encodable};
use crate::error::HashParseError;
use crate::hash::{pow_hash, sha256d};

/// A 32-byte hash value in internal byte order.
///
/// Displayed and parsed in reversed (big-endian) hex, the form used by
/// block explorers and hard-coded chain literals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The zero hash. Used for the genesis parent and null outpoints.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a Hash256 from bytes in internal order.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a reversed-hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, HashParseError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = hex::decode(s).map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(HashParseError::InvalidLength { expected: 32, got: bytes.len() });
        }
        bytes.reverse();
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Hash256 {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Encodable for Hash256 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

/// Reference to a specific output of a previous transaction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutPoint {
    /// Transaction ID containing the referenced output.
    pub txid: Hash256,
    /// Index of the output within the transaction.
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint, spent by coinbase inputs.
    pub fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    /// Check if this is the null outpoint (coinbase marker).
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// A transaction input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    /// The outpoint being spent. Null outpoint for coinbase.
    pub prevout: OutPoint,
    /// Unlocking script. Arbitrary data for coinbase inputs.
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

impl TxIn {
    /// Input spending the null outpoint with the given script.
    pub fn coinbase(script_sig: Vec<u8>) -> Self {
        Self {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.prevout.consensus_encode(out);
        write_var_bytes(out, &self.script_sig);
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// A transaction output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    /// Value in satoshis.
    pub value: i64,
    /// Locking script.
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    /// Zero-value output with an empty script.
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        write_var_bytes(out, &self.script_pubkey);
    }
}

/// A timestamped transaction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    /// Unix timestamp in seconds.
    pub time: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction id: double SHA-256 of the consensus encoding.
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.encoded())
    }

    /// Check if this is a coinbase transaction (single input with null outpoint).
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        write_vec(out, &self.inputs);
        write_vec(out, &self.outputs);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

/// Block header containing the proof-of-work puzzle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    /// Hash of the previous block header.
    pub prev_hash: Hash256,
    /// Merkle root of the block's transaction ids.
    pub merkle_root: Hash256,
    /// Unix timestamp in seconds.
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialize into the fixed 80-byte layout:
    /// version || prev_hash || merkle_root || time || bits || nonce.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_hash.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Block hash under the proof-of-work hash function.
    pub fn hash(&self) -> Hash256 {
        pow_hash(&self.to_bytes())
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes());
    }
}

/// A complete block: header plus transactions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    /// Ordered list of transactions. First transaction must be coinbase.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Get the coinbase transaction, if the block is non-empty.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    /// Transaction ids in block order.
    pub fn txids(&self) -> Vec<Hash256> {
        self.transactions.iter().map(Transaction::txid).collect()
    }

    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }
}
