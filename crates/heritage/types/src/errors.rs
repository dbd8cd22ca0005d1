//! Error types for the registry

use crate::{Action, Amount, CampaignId, CertificateIndex, Identity, TokenId};
use serde::{Deserialize, Serialize};

/// A reference to a registry entity, carried by `NotFound`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    Campaign(CampaignId),
    Certificate(CampaignId, CertificateIndex),
    Token(TokenId),
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityRef::Campaign(id) => write!(f, "campaign {}", id),
            EntityRef::Certificate(id, index) => write!(f, "certificate ({}, {})", id, index),
            EntityRef::Token(id) => write!(f, "token {}", id),
        }
    }
}

/// Errors that can occur in registry operations.
///
/// Every error is a rejection of the whole call: no state has been
/// touched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unauthorized: {caller} may not {action}")]
    Unauthorized { caller: Identity, action: Action },

    #[error("Registry is paused")]
    RegistryPaused,

    #[error("Insufficient escrow: required {required}, posted {posted}")]
    InsufficientEscrow { required: Amount, posted: Amount },

    #[error("Insufficient payment: required {required}, paid {paid}")]
    InsufficientPayment { required: Amount, paid: Amount },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(EntityRef),

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Corrupt registry state: {0}")]
    CorruptState(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Flat classification of [`RegistryError`] for hosts that map errors to codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Unauthorized,
    RegistryPaused,
    InsufficientEscrow,
    InsufficientPayment,
    InvalidArgument,
    NotFound,
    ArithmeticOverflow,
    CorruptState,
    Config,
}

impl RegistryError {
    pub fn unauthorized(caller: Identity, action: Action) -> Self {
        RegistryError::Unauthorized { caller, action }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::Unauthorized { .. } => ErrorKind::Unauthorized,
            RegistryError::RegistryPaused => ErrorKind::RegistryPaused,
            RegistryError::InsufficientEscrow { .. } => ErrorKind::InsufficientEscrow,
            RegistryError::InsufficientPayment { .. } => ErrorKind::InsufficientPayment,
            RegistryError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            RegistryError::NotFound(_) => ErrorKind::NotFound,
            RegistryError::ArithmeticOverflow => ErrorKind::ArithmeticOverflow,
            RegistryError::CorruptState(_) => ErrorKind::CorruptState,
            RegistryError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let caller = Identity::derive("mallory");
        let err = RegistryError::unauthorized(caller, Action::Pause);
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(err.to_string().contains("may not pause"));

        let err = RegistryError::NotFound(EntityRef::Certificate(
            CampaignId::new(1),
            CertificateIndex(3),
        ));
        assert_eq!(err.to_string(), "Not found: certificate (1, 3)");

        let err = RegistryError::InsufficientEscrow {
            required: Amount::new(10_000),
            posted: Amount::zero(),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient escrow: required 10000, posted 0"
        );
    }
}
