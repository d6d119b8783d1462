//! Double SHA-256 Merkle tree for transaction commitment.
//!
//! Internal node: `SHA256d(left || right)`. Leaves are transaction ids used
//! as-is, so a single-leaf tree's root equals that transaction's id.
//! Odd-length layers are padded by duplicating the last element.
//! Empty trees produce [`Hash256::ZERO`].

use crate::hash::sha256d;
use crate::types::Hash256;

/// Compute an internal node hash: `SHA256d(left || right)`.
pub fn node_hash(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(left.as_bytes());
    data[32..].copy_from_slice(right.as_bytes());
    sha256d(&data)
}

/// Compute the Merkle root from a slice of transaction ids.
///
/// Returns [`Hash256::ZERO`] for an empty slice.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    let Some(first) = leaves.first() else {
        return Hash256::ZERO;
    };
    if leaves.len() == 1 {
        return *first;
    }

    let mut current = leaves.to_vec();
    while current.len() > 1 {
        current = next_layer(&current);
    }
    current[0]
}

/// Pair adjacent hashes with [`node_hash`], duplicating the last element
/// when the layer has an odd number of entries.
fn next_layer(layer: &[Hash256]) -> Vec<Hash256> {
    layer
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            node_hash(left, right)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(n: u8) -> Hash256 {
        Hash256([n; 32])
    }

    #[test]
    fn empty_root_is_zero() {
        assert_eq!(merkle_root(&[]), Hash256::ZERO);
    }

    #[test]
    fn single_leaf_root_is_leaf() {
        assert_eq!(merkle_root(&[h(1)]), h(1));
    }

    #[test]
    fn two_leaves() {
        assert_eq!(merkle_root(&[h(1), h(2)]), node_hash(&h(1), &h(2)));
    }

    #[test]
    fn odd_layer_duplicates_last() {
        let expected = node_hash(&node_hash(&h(1), &h(2)), &node_hash(&h(3), &h(3)));
        assert_eq!(merkle_root(&[h(1), h(2), h(3)]), expected);
    }

    #[test]
    fn order_matters() {
        assert_ne!(merkle_root(&[h(1), h(2)]), merkle_root(&[h(2), h(1)]));
    }

    #[test]
    fn node_hash_is_sha256d_of_concat() {
        let mut concat = Vec::new();
        concat.extend_from_slice(h(4).as_bytes());
        concat.extend_from_slice(h(5).as_bytes());
        assert_eq!(node_hash(&h(4), &h(5)), sha256d(&concat));
    }
}
