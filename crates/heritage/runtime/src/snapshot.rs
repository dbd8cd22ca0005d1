//! Snapshots and invariant checking
//!
//! A `RegistrySnapshot` is the full persisted state: roles, policy and
//! every entity. The journal is not part of it; receipts belong to the
//! host once drained. Restoring re-checks every structural invariant so a
//! tampered or truncated snapshot is refused rather than loaded.

use crate::{
    access_control::AccessControl, escrow_policy::EscrowPolicy, pause_switch::PauseSwitch,
    registry::Registry,
};
use heritage_types::{
    Amount, Campaign, CampaignId, CertificateIndex, EventJournal, Identity, Ownership,
    RegistryError, RegistryResult, Token, TokenId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// Serializable registry state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub founder: Identity,
    pub ownership: Ownership,
    pub managers: Vec<Identity>,
    pub paused: bool,
    pub escrow_amount: Amount,
    pub campaigns: Vec<Campaign>,
    pub tokens: Vec<Token>,
}

impl Registry {
    /// Capture the current state
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            founder: self.access.founder(),
            ownership: self.access.ownership(),
            managers: self.access.managers().copied().collect(),
            paused: self.pause.is_paused(),
            escrow_amount: self.escrow.required_escrow(),
            campaigns: self.campaigns.clone(),
            tokens: self.tokens.clone(),
        }
    }

    /// Rebuild a registry from a snapshot, refusing inconsistent state.
    ///
    /// The restored registry starts with an empty journal.
    pub fn restore(snapshot: RegistrySnapshot) -> RegistryResult<Self> {
        let registry = Self {
            access: AccessControl::from_parts(
                snapshot.founder,
                snapshot.ownership,
                snapshot.managers,
            ),
            pause: PauseSwitch::from_state(snapshot.paused),
            escrow: EscrowPolicy::new(snapshot.escrow_amount),
            campaigns: snapshot.campaigns,
            tokens: snapshot.tokens,
            journal: EventJournal::new(),
        };
        if let Err(e) = registry.verify_invariants() {
            warn!(error = %e, "Snapshot rejected");
            return Err(e);
        }

        info!(
            campaigns = registry.campaigns.len(),
            tokens = registry.tokens.len(),
            "Registry restored from snapshot"
        );
        Ok(registry)
    }

    /// Check every structural and accounting invariant
    pub fn verify_invariants(&self) -> RegistryResult<()> {
        if self.access.founder().is_zero() {
            return Err(corrupt("founder is the zero address"));
        }
        if let Ownership::Owned(owner) = self.access.ownership() {
            if owner.is_zero() {
                return Err(corrupt("owner is the zero address; use Destroyed"));
            }
        }
        if self.access.managers().any(Identity::is_zero) {
            return Err(corrupt("manager set contains the zero address"));
        }

        if self.campaigns.is_empty() {
            return Err(corrupt("genesis campaign missing"));
        }
        if self.tokens.is_empty() {
            return Err(corrupt("genesis token missing"));
        }

        for (position, campaign) in self.campaigns.iter().enumerate() {
            if campaign.id != CampaignId(position as u64) {
                return Err(corrupt(format!(
                    "campaign at position {} has id {}",
                    position, campaign.id
                )));
            }
            for (index, certificate) in campaign.certificates.iter().enumerate() {
                if certificate.campaign_id != campaign.id
                    || certificate.index != CertificateIndex(index as u32)
                {
                    return Err(corrupt(format!(
                        "certificate at ({}, {}) is labelled ({}, {})",
                        campaign.id, index, certificate.campaign_id, certificate.index
                    )));
                }
            }
        }
        if self.campaigns[0].certificates.is_empty() {
            return Err(corrupt("genesis certificate missing"));
        }

        let mut balances: HashMap<CampaignId, Amount> = HashMap::new();
        let mut issued: HashMap<(CampaignId, CertificateIndex), u64> = HashMap::new();
        for (position, token) in self.tokens.iter().enumerate() {
            if token.id != TokenId(position as u64) {
                return Err(corrupt(format!(
                    "token at position {} has id {}",
                    position, token.id
                )));
            }
            if self
                .get_certificate(token.campaign_id, token.certificate_index)
                .is_err()
            {
                return Err(corrupt(format!(
                    "token {} references missing certificate ({}, {})",
                    token.id, token.campaign_id, token.certificate_index
                )));
            }
            let balance = balances.entry(token.campaign_id).or_default();
            *balance = balance
                .checked_add(token.value)
                .ok_or(RegistryError::ArithmeticOverflow)?;
            *issued
                .entry((token.campaign_id, token.certificate_index))
                .or_default() += 1;
        }

        for campaign in &self.campaigns {
            let expected = balances.get(&campaign.id).copied().unwrap_or_default();
            if campaign.balance != expected {
                return Err(corrupt(format!(
                    "campaign {} balance {} does not match token total {}",
                    campaign.id, campaign.balance, expected
                )));
            }
            for certificate in &campaign.certificates {
                let minted = issued
                    .get(&(campaign.id, certificate.index))
                    .copied()
                    .unwrap_or(0);
                if certificate.issued != minted {
                    return Err(corrupt(format!(
                        "certificate ({}, {}) records {} issued but {} tokens exist",
                        campaign.id, certificate.index, certificate.issued, minted
                    )));
                }
            }
        }

        Ok(())
    }
}

fn corrupt(reason: impl Into<String>) -> RegistryError {
    RegistryError::CorruptState(reason.into())
}
