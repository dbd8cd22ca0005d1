//! Certificate records: the reward tiers a campaign offers

use crate::{Amount, CampaignId};
use serde::{Deserialize, Serialize};

/// Campaign-local certificate index, starting at 0 within each campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CertificateIndex(pub u32);

impl CertificateIndex {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn as_index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl std::fmt::Display for CertificateIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reward tier scoped to one campaign
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Owning campaign (immutable)
    pub campaign_id: CampaignId,
    /// Position within the owning campaign (immutable)
    pub index: CertificateIndex,
    /// Advertised supply
    pub quantity: u64,
    /// Display name
    pub name: String,
    /// Minimum payment to mint a token against this certificate
    pub price: Amount,
    /// Tokens minted so far
    pub issued: u64,
}

impl Certificate {
    pub fn new(
        campaign_id: CampaignId,
        index: CertificateIndex,
        quantity: u64,
        name: impl Into<String>,
        price: Amount,
    ) -> Self {
        Self {
            campaign_id,
            index,
            quantity,
            name: name.into(),
            price,
            issued: 0,
        }
    }

    /// Overwrite the mutable terms; identity fields stay fixed
    pub fn update_terms(&mut self, quantity: u64, name: impl Into<String>, price: Amount) {
        self.quantity = quantity;
        self.name = name.into();
        self.price = price;
    }

    pub fn accepts(&self, paid: Amount) -> bool {
        paid >= self.price
    }

    pub fn record_issue(&mut self) {
        self.issued = self.issued.saturating_add(1);
    }
}
