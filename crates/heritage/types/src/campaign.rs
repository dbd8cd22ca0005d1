//! Campaign records
//!
//! A campaign is a fundraising initiative. It owns the certificates it
//! offers and accumulates the value paid for tokens minted against them.

use crate::{Amount, Certificate, CertificateIndex, Identity};
use serde::{Deserialize, Serialize};

/// Sequential campaign identifier; id 0 is the genesis campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampaignId(pub u64);

impl CampaignId {
    pub const GENESIS: CampaignId = CampaignId(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn is_genesis(&self) -> bool {
        *self == Self::GENESIS
    }

    /// Arena position, if addressable on this platform
    pub fn as_index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fundraising campaign
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Position in the campaign arena
    pub id: CampaignId,
    /// Display name
    pub name: String,
    /// External content identifier (e.g. an IPFS CID)
    pub content_id: String,
    /// Identity that created the campaign; sole certificate author
    pub creator: Identity,
    /// Set once by activation, never cleared
    pub active: bool,
    /// Sum of the values paid for tokens referencing this campaign
    pub balance: Amount,
    /// Escrow value posted by the creator at creation time
    pub escrow_posted: Amount,
    /// Certificates, where position is the certificate index
    pub certificates: Vec<Certificate>,
}

impl Campaign {
    pub fn new(
        id: CampaignId,
        name: impl Into<String>,
        content_id: impl Into<String>,
        creator: Identity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            content_id: content_id.into(),
            creator,
            active: false,
            balance: Amount::zero(),
            escrow_posted: Amount::zero(),
            certificates: Vec::new(),
        }
    }

    pub fn with_escrow(mut self, posted: Amount) -> Self {
        self.escrow_posted = posted;
        self
    }

    pub fn is_creator(&self, identity: &Identity) -> bool {
        self.creator == *identity
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn certificate(&self, index: CertificateIndex) -> Option<&Certificate> {
        self.certificates.get(index.as_index()?)
    }

    pub fn certificate_mut(&mut self, index: CertificateIndex) -> Option<&mut Certificate> {
        self.certificates.get_mut(index.as_index()?)
    }

    /// Index the next appended certificate will receive, `None` once exhausted
    pub fn next_certificate_index(&self) -> Option<CertificateIndex> {
        u32::try_from(self.certificates.len())
            .ok()
            .map(CertificateIndex)
    }

    /// Indices of this campaign's certificates, in creation order
    pub fn certificate_indices(&self) -> impl Iterator<Item = CertificateIndex> + '_ {
        self.certificates.iter().map(|c| c.index)
    }

    pub fn certificate_count(&self) -> usize {
        self.certificates.len()
    }
}
