//! Escrow Policy: minimum value posted to open a campaign

use crate::access_control::AccessControl;
use heritage_types::{
    Action, Amount, EventJournal, Identity, RegistryError, RegistryEvent, RegistryResult,
};
use tracing::{info, warn};

/// The escrow threshold in force for new campaigns.
///
/// Changes apply to campaigns created afterwards only; the value a
/// campaign posted is kept on the campaign itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscrowPolicy {
    required: Amount,
}

impl EscrowPolicy {
    pub fn new(required: Amount) -> Self {
        Self { required }
    }

    /// Replace the threshold
    pub fn change_escrow_amount(
        &mut self,
        caller: &Identity,
        amount: Amount,
        access: &AccessControl,
        journal: &mut EventJournal,
    ) -> RegistryResult<()> {
        access.ensure_owner(caller, Action::ChangeEscrowAmount)?;

        let previous = self.required;
        self.required = amount;

        info!(previous = previous.0, amount = amount.0, "Escrow amount changed");
        journal.record(
            *caller,
            RegistryEvent::EscrowAmountChanged { previous, amount },
        );
        Ok(())
    }

    /// Fail with `InsufficientEscrow` if `posted` is below the threshold
    pub fn check(&self, posted: Amount) -> RegistryResult<()> {
        if posted < self.required {
            warn!(
                required = self.required.0,
                posted = posted.0,
                "Campaign escrow below threshold"
            );
            return Err(RegistryError::InsufficientEscrow {
                required: self.required,
                posted,
            });
        }
        Ok(())
    }

    pub fn required_escrow(&self) -> Amount {
        self.required
    }
}
