//! Caller identities
//!
//! An `Identity` is an opaque address supplied by the host after it has
//! authenticated the caller. The registry only ever compares identities
//! byte for byte.

use crate::{RegistryError, RegistryResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of an identity in bytes.
pub const IDENTITY_LEN: usize = 20;

/// An opaque, comparable account address.
///
/// Serializes as a `0x`-prefixed hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(pub [u8; IDENTITY_LEN]);

impl Identity {
    pub fn from_bytes(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }

    /// The null address. Read back as the owner once the registry is destroyed.
    pub fn zero() -> Self {
        Self([0u8; IDENTITY_LEN])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; IDENTITY_LEN]
    }

    /// Derive a deterministic address from a human label.
    ///
    /// Takes the first 20 bytes of the BLAKE3 digest of the label. Used by
    /// hosts that key accounts by name and throughout the test suites.
    pub fn derive(label: &str) -> Self {
        let hash = blake3::hash(label.as_bytes());
        let mut bytes = [0u8; IDENTITY_LEN];
        bytes.copy_from_slice(&hash.as_bytes()[..IDENTITY_LEN]);
        Self(bytes)
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        let digits: String = self.0.iter().map(|b| format!("{:02x}", b)).collect();
        format!("0x{}", digits)
    }

    /// Parse a hex address, with or without the `0x` prefix.
    pub fn from_hex(hex: &str) -> RegistryResult<Self> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        if digits.len() != IDENTITY_LEN * 2 {
            return Err(RegistryError::InvalidArgument(format!(
                "identity must be {} hex digits, got {}",
                IDENTITY_LEN * 2,
                digits.len()
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RegistryError::InvalidArgument(format!(
                "invalid hex in identity: {}",
                hex
            )));
        }
        let mut bytes = [0u8; IDENTITY_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| {
                RegistryError::InvalidArgument(format!("invalid hex in identity: {}", hex))
            })?;
        }
        Ok(Self(bytes))
    }

    /// Short display form (first 4 bytes)
    pub fn short(&self) -> String {
        self.to_hex().chars().take(10).collect()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.short())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Identity::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
