//! Access Control: owner, founder, and manager roles
//!
//! The owner is the single administrative identity. Ownership can be
//! handed over or destroyed; destruction is terminal. Managers are the
//! identities allowed to open campaigns. The founder is the deployer,
//! recorded once and never changed.

use heritage_types::{
    Action, EventJournal, Identity, Ownership, RegistryError, RegistryEvent, RegistryResult,
};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Role state with owner-gated mutation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessControl {
    /// Deploying identity
    founder: Identity,
    /// Current owner, or `Destroyed`
    ownership: Ownership,
    /// Identities allowed to create campaigns
    managers: BTreeSet<Identity>,
}

impl AccessControl {
    /// The deployer becomes founder, owner, and sole manager
    pub fn new(deployer: Identity) -> Self {
        let mut managers = BTreeSet::new();
        managers.insert(deployer);
        Self {
            founder: deployer,
            ownership: Ownership::Owned(deployer),
            managers,
        }
    }

    /// Rebuild from persisted parts without re-validating them
    pub fn from_parts(
        founder: Identity,
        ownership: Ownership,
        managers: impl IntoIterator<Item = Identity>,
    ) -> Self {
        Self {
            founder,
            ownership,
            managers: managers.into_iter().collect(),
        }
    }

    // --- Authorization predicates ---

    /// Fail with `Unauthorized` unless `caller` is the live owner
    pub fn ensure_owner(&self, caller: &Identity, action: Action) -> RegistryResult<()> {
        if self.ownership.is_owner(caller) {
            return Ok(());
        }
        warn!(
            caller = %caller,
            action = %action,
            destroyed = self.ownership.is_destroyed(),
            "Owner-gated call rejected"
        );
        Err(RegistryError::unauthorized(*caller, action))
    }

    /// Managers and the live owner may open campaigns
    pub fn can_create_campaign(&self, caller: &Identity) -> bool {
        self.is_manager(caller) || self.ownership.is_owner(caller)
    }

    // --- Owner operations ---

    /// Hand the owner role to `new_owner`
    pub fn transfer_ownership(
        &mut self,
        caller: &Identity,
        new_owner: Identity,
        journal: &mut EventJournal,
    ) -> RegistryResult<()> {
        self.ensure_owner(caller, Action::TransferOwnership)?;
        if new_owner.is_zero() {
            return Err(RegistryError::InvalidArgument(
                "new owner must not be the zero address".into(),
            ));
        }

        let previous = self.ownership.owner();
        self.ownership = Ownership::Owned(new_owner);

        info!(previous = %previous, new_owner = %new_owner, "Ownership transferred");
        journal.record(
            *caller,
            RegistryEvent::OwnershipTransferred {
                previous,
                new_owner,
            },
        );
        Ok(())
    }

    /// Clear ownership permanently
    pub fn destroy(&mut self, caller: &Identity, journal: &mut EventJournal) -> RegistryResult<()> {
        self.ensure_owner(caller, Action::Destroy)?;

        let previous = self.ownership.owner();
        self.ownership = Ownership::Destroyed;

        warn!(previous = %previous, "Registry ownership destroyed");
        journal.record(*caller, RegistryEvent::Destroyed { previous });
        Ok(())
    }

    /// Add a manager. Returns `false` if it was already one.
    pub fn add_manager(
        &mut self,
        caller: &Identity,
        manager: Identity,
        journal: &mut EventJournal,
    ) -> RegistryResult<bool> {
        self.ensure_owner(caller, Action::AddManager)?;
        if manager.is_zero() {
            return Err(RegistryError::InvalidArgument(
                "manager must not be the zero address".into(),
            ));
        }

        if !self.managers.insert(manager) {
            debug!(manager = %manager, "Manager already present");
            return Ok(false);
        }

        info!(manager = %manager, "Manager added");
        journal.record(*caller, RegistryEvent::ManagerAdded { manager });
        Ok(true)
    }

    /// Remove a manager. Returns `false` if it was not one.
    pub fn remove_manager(
        &mut self,
        caller: &Identity,
        manager: Identity,
        journal: &mut EventJournal,
    ) -> RegistryResult<bool> {
        self.ensure_owner(caller, Action::RemoveManager)?;

        if !self.managers.remove(&manager) {
            debug!(manager = %manager, "Manager not present");
            return Ok(false);
        }

        info!(manager = %manager, "Manager removed");
        journal.record(*caller, RegistryEvent::ManagerRemoved { manager });
        Ok(true)
    }

    // --- Query methods ---

    pub fn owner(&self) -> Identity {
        self.ownership.owner()
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn founder(&self) -> Identity {
        self.founder
    }

    pub fn is_owner(&self, identity: &Identity) -> bool {
        self.ownership.is_owner(identity)
    }

    pub fn is_manager(&self, identity: &Identity) -> bool {
        self.managers.contains(identity)
    }

    pub fn managers(&self) -> impl Iterator<Item = &Identity> {
        self.managers.iter()
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (AccessControl, EventJournal, Identity) {
        let deployer = Identity::derive("deployer");
        (AccessControl::new(deployer), EventJournal::new(), deployer)
    }

    #[test]
    fn test_deployer_holds_every_role() {
        let (access, _, deployer) = setup();
        assert_eq!(access.owner(), deployer);
        assert_eq!(access.founder(), deployer);
        assert!(access.is_manager(&deployer));
        assert_eq!(access.manager_count(), 1);
    }

    #[test]
    fn test_transfer_ownership() {
        let (mut access, mut journal, deployer) = setup();
        let mallory = Identity::derive("mallory");

        access
            .transfer_ownership(&deployer, mallory, &mut journal)
            .unwrap();
        assert_eq!(access.owner(), mallory);
        assert_eq!(access.founder(), deployer);

        // The previous owner lost the role
        let err = access
            .transfer_ownership(&deployer, deployer, &mut journal)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { .. }));
        assert_eq!(journal.pending_count(), 1);
    }

    #[test]
    fn test_transfer_to_zero_rejected() {
        let (mut access, mut journal, deployer) = setup();
        let err = access
            .transfer_ownership(&deployer, Identity::zero(), &mut journal)
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
        assert_eq!(access.owner(), deployer);
        assert_eq!(journal.pending_count(), 0);
    }

    #[test]
    fn test_non_owner_cannot_transfer() {
        let (mut access, mut journal, _) = setup();
        let mallory = Identity::derive("mallory");
        let err = access
            .transfer_ownership(&mallory, mallory, &mut journal)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::unauthorized(mallory, Action::TransferOwnership)
        );
    }

    #[test]
    fn test_destroy_is_terminal() {
        let (mut access, mut journal, deployer) = setup();
        access.destroy(&deployer, &mut journal).unwrap();

        assert!(access.owner().is_zero());
        assert!(access.ownership().is_destroyed());
        assert!(access.ensure_owner(&deployer, Action::Pause).is_err());
        assert!(access
            .ensure_owner(&Identity::zero(), Action::Pause)
            .is_err());
        assert!(access.destroy(&deployer, &mut journal).is_err());
        assert!(access
            .transfer_ownership(&deployer, deployer, &mut journal)
            .is_err());
    }

    #[test]
    fn test_manager_membership_is_idempotent() {
        let (mut access, mut journal, deployer) = setup();
        let m = Identity::derive("manager");

        assert!(access.add_manager(&deployer, m, &mut journal).unwrap());
        assert!(!access.add_manager(&deployer, m, &mut journal).unwrap());
        assert_eq!(access.manager_count(), 2);

        assert!(access.remove_manager(&deployer, m, &mut journal).unwrap());
        assert!(!access.remove_manager(&deployer, m, &mut journal).unwrap());
        assert_eq!(access.manager_count(), 1);

        // Only the two changing calls were journaled
        assert_eq!(journal.pending_count(), 2);
    }

    #[test]
    fn test_can_create_campaign() {
        let (mut access, mut journal, deployer) = setup();
        let m = Identity::derive("manager");
        assert!(access.can_create_campaign(&deployer));
        assert!(!access.can_create_campaign(&m));

        access.add_manager(&deployer, m, &mut journal).unwrap();
        assert!(access.can_create_campaign(&m));

        // An owner who is not a manager still qualifies
        access.remove_manager(&deployer, deployer, &mut journal).unwrap();
        assert!(access.can_create_campaign(&deployer));
    }

    #[test]
    fn test_zero_manager_rejected() {
        let (mut access, mut journal, deployer) = setup();
        assert!(matches!(
            access.add_manager(&deployer, Identity::zero(), &mut journal),
            Err(RegistryError::InvalidArgument(_))
        ));
    }
}
