//! Base58Check address and key encoding.
//!
//! Each address kind has a network-specific byte prefix prepended to the
//! payload before Base58Check encoding. A network's prefixes must be
//! pairwise distinct and prefix-free so that any decoded string maps back
//! to exactly one kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AddressError;

/// The kinds of value carried by human-readable encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AddressKind {
    /// Pay-to-pubkey-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// Exported private key.
    SecretKey,
    /// Stealth (scan/spend key) address.
    StealthAddress,
    /// Extended public key.
    ExtPublicKey,
    /// Extended private key.
    ExtSecretKey,
}

impl AddressKind {
    pub const ALL: [AddressKind; 6] = [
        AddressKind::PubkeyAddress,
        AddressKind::ScriptAddress,
        AddressKind::SecretKey,
        AddressKind::StealthAddress,
        AddressKind::ExtPublicKey,
        AddressKind::ExtSecretKey,
    ];

    /// Whether a decoded payload of `len` bytes is well-formed for this kind.
    pub fn accepts_payload_len(&self, len: usize) -> bool {
        match self {
            Self::PubkeyAddress | Self::ScriptAddress => len == 20,
            // Optional trailing compression flag.
            Self::SecretKey => len == 32 || len == 33,
            // Options byte, scan key, spend key count, spend keys, signatures.
            Self::StealthAddress => len >= 69,
            Self::ExtPublicKey | Self::ExtSecretKey => len == 74,
        }
    }
}

/// Validated mapping from address kind to prefix bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressPrefixes {
    prefixes: BTreeMap<AddressKind, Vec<u8>>,
}

impl AddressPrefixes {
    /// Build from one entry per kind.
    ///
    /// Fails if a kind is missing or has an empty prefix, if two kinds share a
    /// prefix, or if one prefix is a leading substring of another.
    pub fn new(entries: impl IntoIterator<Item = (AddressKind, Vec<u8>)>) -> Result<Self, AddressError> {
        let prefixes: BTreeMap<AddressKind, Vec<u8>> = entries.into_iter().collect();

        for kind in AddressKind::ALL {
            match prefixes.get(&kind) {
                None => return Err(AddressError::MissingPrefix(kind)),
                Some(p) if p.is_empty() => return Err(AddressError::EmptyPrefix(kind)),
                Some(_) => {}
            }
        }

        for (a, pa) in &prefixes {
            for (b, pb) in &prefixes {
                if a >= b {
                    continue;
                }
                if pa == pb {
                    return Err(AddressError::DuplicatePrefix(*a, *b));
                }
                if pb.starts_with(pa) {
                    return Err(AddressError::AmbiguousPrefix { short: *a, long: *b });
                }
                if pa.starts_with(pb) {
                    return Err(AddressError::AmbiguousPrefix { short: *b, long: *a });
                }
            }
        }

        Ok(Self { prefixes })
    }

    /// Prefix bytes for `kind`.
    pub fn get(&self, kind: AddressKind) -> &[u8] {
        // `new` rejects sets missing any kind.
        &self.prefixes[&kind]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressKind, &[u8])> {
        self.prefixes.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Base58Check-encode `payload` as `kind`.
    pub fn encode(&self, kind: AddressKind, payload: &[u8]) -> String {
        let prefix = self.get(kind);
        let mut data = Vec::with_capacity(prefix.len() + payload.len());
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }

    /// Decode a Base58Check string into its kind and payload.
    pub fn decode(&self, s: &str) -> Result<(AddressKind, Vec<u8>), AddressError> {
        let data = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|e| AddressError::Base58(e.to_string()))?;

        let (kind, prefix) = self
            .iter()
            .find(|(_, prefix)| data.starts_with(prefix))
            .ok_or(AddressError::UnknownPrefix)?;

        let payload = data[prefix.len()..].to_vec();
        if !kind.accepts_payload_len(payload.len()) {
            return Err(AddressError::InvalidPayloadLength { kind, len: payload.len() });
        }
        Ok((kind, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AddressPrefixes {
        AddressPrefixes::new([
            (AddressKind::PubkeyAddress, vec![137]),
            (AddressKind::ScriptAddress, vec![85]),
            (AddressKind::SecretKey, vec![153]),
            (AddressKind::StealthAddress, vec![40]),
            (AddressKind::ExtPublicKey, vec![0x04, 0x88, 0xB2, 0x1E]),
            (AddressKind::ExtSecretKey, vec![0x04, 0x88, 0xAD, 0xE4]),
        ])
        .unwrap()
    }

    fn sample_payload(kind: AddressKind) -> Vec<u8> {
        let len = match kind {
            AddressKind::PubkeyAddress | AddressKind::ScriptAddress => 20,
            AddressKind::SecretKey => 33,
            AddressKind::StealthAddress => 71,
            AddressKind::ExtPublicKey | AddressKind::ExtSecretKey => 74,
        };
        (0..len).map(|i| i as u8).collect()
    }

    // --- Construction ---

    #[test]
    fn get_returns_configured_prefix() {
        let p = sample();
        assert_eq!(p.get(AddressKind::PubkeyAddress), &[137]);
        assert_eq!(p.get(AddressKind::ExtSecretKey), &[0x04, 0x88, 0xAD, 0xE4]);
    }

    #[test]
    fn get_covers_every_kind() {
        let p = sample();
        for kind in AddressKind::ALL {
            assert!(!p.get(kind).is_empty(), "{kind:?}");
        }
        assert_eq!(p.iter().count(), AddressKind::ALL.len());
    }

    #[test]
    fn missing_kind_rejected() {
        let err = AddressPrefixes::new([(AddressKind::PubkeyAddress, vec![1])]).unwrap_err();
        assert_eq!(err, AddressError::MissingPrefix(AddressKind::ScriptAddress));
    }

    #[test]
    fn empty_prefix_rejected() {
        let mut entries: Vec<_> = sample().iter().map(|(k, p)| (k, p.to_vec())).collect();
        entries[0].1.clear();
        let err = AddressPrefixes::new(entries).unwrap_err();
        assert_eq!(err, AddressError::EmptyPrefix(AddressKind::PubkeyAddress));
    }

    #[test]
    fn duplicate_prefix_rejected() {
        let mut entries: Vec<_> = sample().iter().map(|(k, p)| (k, p.to_vec())).collect();
        entries[1].1 = vec![137];
        let err = AddressPrefixes::new(entries).unwrap_err();
        assert_eq!(
            err,
            AddressError::DuplicatePrefix(AddressKind::PubkeyAddress, AddressKind::ScriptAddress)
        );
    }

    #[test]
    fn leading_substring_rejected() {
        let mut entries: Vec<_> = sample().iter().map(|(k, p)| (k, p.to_vec())).collect();
        // StealthAddress becomes 0x04, a prefix of both extended-key prefixes.
        entries[3].1 = vec![0x04];
        let err = AddressPrefixes::new(entries).unwrap_err();
        assert_eq!(
            err,
            AddressError::AmbiguousPrefix {
                short: AddressKind::StealthAddress,
                long: AddressKind::ExtPublicKey,
            }
        );
    }

    // --- Encoding ---

    #[test]
    fn decode_recovers_kind_for_every_kind() {
        let p = sample();
        for kind in AddressKind::ALL {
            let payload = sample_payload(kind);
            let encoded = p.encode(kind, &payload);
            let (decoded_kind, decoded_payload) = p.decode(&encoded).unwrap();
            assert_eq!(decoded_kind, kind);
            assert_eq!(decoded_payload, payload);
        }
    }

    #[test]
    fn extended_public_key_has_xpub_form() {
        let encoded = sample().encode(AddressKind::ExtPublicKey, &[0u8; 74]);
        assert!(encoded.starts_with("xpub"), "{encoded}");
    }

    #[test]
    fn decode_rejects_bad_checksum() {
        let p = sample();
        let mut encoded = p.encode(AddressKind::PubkeyAddress, &[7u8; 20]);
        let last = encoded.pop().unwrap();
        encoded.push(if last == '1' { '2' } else { '1' });
        assert!(matches!(p.decode(&encoded), Err(AddressError::Base58(_))));
    }

    #[test]
    fn decode_rejects_unknown_prefix() {
        let s = bs58::encode([0u8; 21]).with_check().into_string();
        assert_eq!(sample().decode(&s), Err(AddressError::UnknownPrefix));
    }

    #[test]
    fn decode_rejects_wrong_payload_length() {
        let p = sample();
        let encoded = p.encode(AddressKind::PubkeyAddress, &[7u8; 19]);
        assert_eq!(
            p.decode(&encoded),
            Err(AddressError::InvalidPayloadLength { kind: AddressKind::PubkeyAddress, len: 19 })
        );
    }
}
