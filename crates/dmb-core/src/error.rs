//! Error types for the DigitalMoneyBits core primitives.
use thiserror::Error;

use crate::address::AddressKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashParseError {
    #[error("invalid hex: {0}")] InvalidHex(String),
    #[error("invalid length: expected {expected} bytes, got {got}")] InvalidLength { expected: usize, got: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("negative compact target: {0:#010x}")] Negative(u32),
    #[error("overflowing compact target: {0:#010x}")] Overflow(u32),
    #[error("zero target")] Zero,
    #[error("target above proof-of-work limit")] AboveLimit,
    #[error("hash does not meet target")] HashAboveTarget,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("base58: {0}")] Base58(String),
    #[error("no address kind matches the decoded prefix")] UnknownPrefix,
    #[error("invalid payload length for {kind:?}: {len}")] InvalidPayloadLength { kind: AddressKind, len: usize },
    #[error("missing prefix for {0:?}")] MissingPrefix(AddressKind),
    #[error("empty prefix for {0:?}")] EmptyPrefix(AddressKind),
    #[error("{0:?} and {1:?} share a prefix")] DuplicatePrefix(AddressKind, AddressKind),
    #[error("prefix of {short:?} is a leading substring of {long:?}")] AmbiguousPrefix { short: AddressKind, long: AddressKind },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkIdError {
    #[error("unknown network: {0}")] Unknown(String),
}
