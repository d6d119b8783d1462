//! Fixed seed conversion.
//!
//! Fixed seeds are compiled in as packed IPv4 words and turned into peer
//! addresses at startup. Each address gets a synthetic "last seen" time
//! between one and two weeks in the past; a node only contacts a seed or two
//! before peers hand it fresher addresses.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddrV4};
use tracing::debug;

use dmb_core::constants::ONE_WEEK_SECS;

/// Mainnet fixed seed table. Populated from the seed generator output.
pub const MAINNET_SEEDS: &[u32] = &[];

/// Testnet fixed seed table.
pub const TESTNET_SEEDS: &[u32] = &[];

/// A pre-resolved peer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddrV4,
    /// Unix timestamp advertised as the last time this peer was seen.
    pub last_seen: i64,
}

/// Decode one packed table word.
///
/// The word's most significant byte is the first octet, so a table entry of
/// `0x01020304` is `1.2.3.4` regardless of host byte order.
pub fn seed_ip(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_be_bytes())
}

/// Convert a packed seed table into peer addresses on `port`.
///
/// `last_seen` for every entry lies in `(now - 2 weeks, now - 1 week]`.
pub fn convert_seeds<R: Rng + ?Sized>(table: &[u32], port: u16, now: i64, rng: &mut R) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|&raw| SeedAddress {
            addr: SocketAddrV4::new(seed_ip(raw), port),
            last_seen: now - ONE_WEEK_SECS - rng.gen_range(0..ONE_WEEK_SECS),
        })
        .collect()
}

/// [`convert_seeds`] against the wall clock and the thread-local RNG.
pub fn convert_seeds_now(table: &[u32], port: u16) -> Vec<SeedAddress> {
    let seeds = convert_seeds(table, port, Utc::now().timestamp(), &mut rand::thread_rng());
    debug!(count = seeds.len(), port, "converted fixed seeds");
    seeds
}
