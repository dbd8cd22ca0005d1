//! Token records: proof-of-contribution receipts

use crate::{Amount, CampaignId, CertificateIndex, Identity};
use serde::{Deserialize, Serialize};

/// Global sequential token identifier; id 0 is the genesis token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    pub const GENESIS: TokenId = TokenId(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A minted contribution receipt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub campaign_id: CampaignId,
    pub certificate_index: CertificateIndex,
    /// Who paid for the token
    pub holder: Identity,
    /// Value paid, credited to the campaign balance
    pub value: Amount,
}

impl Token {
    pub fn new(
        id: TokenId,
        campaign_id: CampaignId,
        certificate_index: CertificateIndex,
        holder: Identity,
        value: Amount,
    ) -> Self {
        Self {
            id,
            campaign_id,
            certificate_index,
            holder,
            value,
        }
    }

    pub fn references(&self, campaign_id: CampaignId, index: CertificateIndex) -> bool {
        self.campaign_id == campaign_id && self.certificate_index == index
    }
}
