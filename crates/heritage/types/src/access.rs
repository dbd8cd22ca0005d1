//! Ownership state

use crate::Identity;
use serde::{Deserialize, Serialize};

/// Who holds the owner role.
///
/// `Destroyed` is terminal: there is no transition out of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    /// A live owner
    Owned(Identity),
    /// Ownership was cleared by `destroy`; owner-gated calls fail forever
    Destroyed,
}

impl Ownership {
    /// The current owner, or the zero address once destroyed
    pub fn owner(&self) -> Identity {
        match self {
            Ownership::Owned(owner) => *owner,
            Ownership::Destroyed => Identity::zero(),
        }
    }

    pub fn is_owner(&self, caller: &Identity) -> bool {
        match self {
            Ownership::Owned(owner) => owner == caller,
            Ownership::Destroyed => false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, Ownership::Destroyed)
    }
}

/// Administrative actions, named in authorization failures and logs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    TransferOwnership,
    Destroy,
    AddManager,
    RemoveManager,
    Pause,
    Unpause,
    ChangeEscrowAmount,
    CreateCampaign,
    ActivateCampaign,
    CreateCertificate,
    UpdateCertificate,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::TransferOwnership => "transfer_ownership",
            Action::Destroy => "destroy",
            Action::AddManager => "add_manager",
            Action::RemoveManager => "remove_manager",
            Action::Pause => "pause",
            Action::Unpause => "unpause",
            Action::ChangeEscrowAmount => "change_escrow_amount",
            Action::CreateCampaign => "create_campaign",
            Action::ActivateCampaign => "activate_campaign",
            Action::CreateCertificate => "create_certificate",
            Action::UpdateCertificate => "update_certificate",
        };
        write!(f, "{}", name)
    }
}
