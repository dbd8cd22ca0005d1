//! Pause Switch: global halt flag
//!
//! Redundant pause/unpause calls succeed without effect and are not
//! journaled.

use crate::access_control::AccessControl;
use heritage_types::{Action, EventJournal, Identity, RegistryError, RegistryEvent, RegistryResult};
use tracing::{debug, info, warn};

/// Owner-controlled halt flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PauseSwitch {
    paused: bool,
}

impl PauseSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(paused: bool) -> Self {
        Self { paused }
    }

    /// Halt mutating operations. Returns whether the flag changed.
    pub fn pause(
        &mut self,
        caller: &Identity,
        access: &AccessControl,
        journal: &mut EventJournal,
    ) -> RegistryResult<bool> {
        access.ensure_owner(caller, Action::Pause)?;
        if self.paused {
            debug!("Registry already paused");
            return Ok(false);
        }

        self.paused = true;
        warn!(caller = %caller, "Registry paused");
        journal.record(*caller, RegistryEvent::Paused);
        Ok(true)
    }

    /// Resume mutating operations. Returns whether the flag changed.
    pub fn unpause(
        &mut self,
        caller: &Identity,
        access: &AccessControl,
        journal: &mut EventJournal,
    ) -> RegistryResult<bool> {
        access.ensure_owner(caller, Action::Unpause)?;
        if !self.paused {
            debug!("Registry not paused");
            return Ok(false);
        }

        self.paused = false;
        info!(caller = %caller, "Registry unpaused");
        journal.record(*caller, RegistryEvent::Unpaused);
        Ok(true)
    }

    /// Gate for every mutating operation other than pause, unpause,
    /// ownership transfer and destroy
    pub fn ensure_running(&self) -> RegistryResult<()> {
        if self.paused {
            warn!("Call rejected: registry paused");
            return Err(RegistryError::RegistryPaused);
        }
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PauseSwitch, AccessControl, EventJournal, Identity) {
        let owner = Identity::derive("owner");
        (
            PauseSwitch::new(),
            AccessControl::new(owner),
            EventJournal::new(),
            owner,
        )
    }

    #[test]
    fn test_pause_and_unpause() {
        let (mut switch, access, mut journal, owner) = setup();
        assert!(switch.ensure_running().is_ok());

        assert!(switch.pause(&owner, &access, &mut journal).unwrap());
        assert!(switch.is_paused());
        assert_eq!(switch.ensure_running(), Err(RegistryError::RegistryPaused));

        assert!(switch.unpause(&owner, &access, &mut journal).unwrap());
        assert!(!switch.is_paused());
        assert_eq!(journal.pending_count(), 2);
    }

    #[test]
    fn test_redundant_calls_are_noops() {
        let (mut switch, access, mut journal, owner) = setup();
        assert!(!switch.unpause(&owner, &access, &mut journal).unwrap());

        switch.pause(&owner, &access, &mut journal).unwrap();
        assert!(!switch.pause(&owner, &access, &mut journal).unwrap());
        assert!(switch.is_paused());
        assert_eq!(journal.pending_count(), 1);
    }

    #[test]
    fn test_non_owner_rejected() {
        let (mut switch, access, mut journal, owner) = setup();
        let mallory = Identity::derive("mallory");

        assert!(matches!(
            switch.pause(&mallory, &access, &mut journal),
            Err(RegistryError::Unauthorized { .. })
        ));

        switch.pause(&owner, &access, &mut journal).unwrap();
        assert!(matches!(
            switch.unpause(&mallory, &access, &mut journal),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert!(switch.is_paused());
    }
}
