//! Registry events and the receipt journal
//!
//! Every committed mutation produces exactly one receipt. Rejected calls
//! and idempotent no-ops produce none. The journal is append-only; hosts
//! take delivered receipts with `drain` while sequence numbers keep
//! counting.

use crate::{Amount, CampaignId, CertificateIndex, Identity, TokenId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A committed state change
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryEvent {
    OwnershipTransferred {
        previous: Identity,
        new_owner: Identity,
    },
    Destroyed {
        previous: Identity,
    },
    ManagerAdded {
        manager: Identity,
    },
    ManagerRemoved {
        manager: Identity,
    },
    Paused,
    Unpaused,
    EscrowAmountChanged {
        previous: Amount,
        amount: Amount,
    },
    CampaignCreated {
        campaign_id: CampaignId,
        creator: Identity,
        escrow_posted: Amount,
    },
    CampaignActivated {
        campaign_id: CampaignId,
    },
    CertificateCreated {
        campaign_id: CampaignId,
        index: CertificateIndex,
        quantity: u64,
        price: Amount,
    },
    CertificateUpdated {
        campaign_id: CampaignId,
        index: CertificateIndex,
        quantity: u64,
        price: Amount,
    },
    TokenCreated {
        token_id: TokenId,
        campaign_id: CampaignId,
        index: CertificateIndex,
        holder: Identity,
        value: Amount,
    },
}

/// A journal entry wrapping one event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryReceipt {
    /// Unique receipt identifier
    pub receipt_id: String,
    /// Position in the journal, gapless from 0
    pub sequence: u64,
    /// The caller whose operation committed
    pub actor: Identity,
    pub event: RegistryEvent,
    /// Wall-clock time the receipt was written
    pub timestamp: DateTime<Utc>,
}

/// Append-only receipt log owned by the registry
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventJournal {
    receipts: Vec<RegistryReceipt>,
    next_sequence: u64,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, returning its sequence number
    pub fn record(&mut self, actor: Identity, event: RegistryEvent) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.receipts.push(RegistryReceipt {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            actor,
            event,
            timestamp: Utc::now(),
        });
        sequence
    }

    /// Receipts not yet drained
    pub fn receipts(&self) -> &[RegistryReceipt] {
        &self.receipts
    }

    pub fn receipts_for_actor(&self, actor: &Identity) -> Vec<&RegistryReceipt> {
        self.receipts.iter().filter(|r| r.actor == *actor).collect()
    }

    pub fn last(&self) -> Option<&RegistryReceipt> {
        self.receipts.last()
    }

    /// Hand pending receipts to the host
    pub fn drain(&mut self) -> Vec<RegistryReceipt> {
        std::mem::take(&mut self.receipts)
    }

    /// Number of receipts ever recorded, drained or not
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence
    }

    pub fn pending_count(&self) -> usize {
        self.receipts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_survives_drain() {
        let owner = Identity::derive("owner");
        let mut journal = EventJournal::new();

        assert_eq!(journal.record(owner, RegistryEvent::Paused), 0);
        assert_eq!(journal.record(owner, RegistryEvent::Unpaused), 1);
        assert_eq!(journal.pending_count(), 2);

        let drained = journal.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(journal.pending_count(), 0);

        assert_eq!(journal.record(owner, RegistryEvent::Paused), 2);
        assert_eq!(journal.total_recorded(), 3);
        assert_eq!(journal.last().unwrap().sequence, 2);
    }

    #[test]
    fn test_receipts_for_actor() {
        let owner = Identity::derive("owner");
        let other = Identity::derive("other");
        let mut journal = EventJournal::new();

        journal.record(owner, RegistryEvent::Paused);
        journal.record(
            other,
            RegistryEvent::ManagerAdded {
                manager: Identity::derive("m"),
            },
        );

        assert_eq!(journal.receipts_for_actor(&owner).len(), 1);
        assert_eq!(journal.receipts_for_actor(&other).len(), 1);
        assert!(journal
            .receipts_for_actor(&Identity::derive("nobody"))
            .is_empty());
    }
}
