//! # dmb-core
//! Foundation types, hashing, and encodings for DigitalMoneyBits.

pub mod address;
pub mod constants;
pub mod encode;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod script;
pub mod target;
pub mod types;
