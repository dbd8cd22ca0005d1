//! Mutating operations expressed as data
//!
//! A serializing host can queue `RegistryCommand`s and apply them one at a
//! time through `Registry::execute` in the runtime crate.

use crate::{Amount, CampaignId, CertificateIndex, Identity, TokenId};
use serde::{Deserialize, Serialize};

/// Every state-changing registry operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryCommand {
    TransferOwnership {
        new_owner: Identity,
    },
    Destroy,
    AddManager {
        manager: Identity,
    },
    RemoveManager {
        manager: Identity,
    },
    Pause,
    Unpause,
    ChangeEscrowAmount {
        amount: Amount,
    },
    CreateCampaign {
        name: String,
        content_id: String,
    },
    ActivateCampaign {
        campaign_id: CampaignId,
    },
    CreateCertificate {
        campaign_id: CampaignId,
        quantity: u64,
        name: String,
        price: Amount,
    },
    UpdateCertificate {
        campaign_id: CampaignId,
        index: CertificateIndex,
        quantity: u64,
        name: String,
        price: Amount,
    },
    CreateToken {
        campaign_id: CampaignId,
        index: CertificateIndex,
    },
}

/// What a successfully executed command produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The command committed (or was an idempotent no-op) with no new id
    Done,
    /// Manager add/remove: whether the set changed
    MembershipChanged { changed: bool },
    /// Pause/unpause: whether the flag changed
    PauseChanged { changed: bool },
    CampaignCreated { campaign_id: CampaignId },
    CertificateCreated { campaign_id: CampaignId, index: CertificateIndex },
    TokenCreated { token_id: TokenId },
}
