//! Command execution: applies a `RegistryCommand` to the registry

use crate::registry::Registry;
use heritage_types::{CallContext, CommandOutcome, RegistryCommand, RegistryResult};
use tracing::debug;

impl Registry {
    /// Apply one command on behalf of `ctx.caller`.
    ///
    /// Dispatches to the typed operation, so validation, logging and
    /// journaling are identical to calling it directly.
    pub fn execute(
        &mut self,
        ctx: &CallContext,
        command: RegistryCommand,
    ) -> RegistryResult<CommandOutcome> {
        debug!(caller = %ctx.caller, command = ?command, "Executing command");

        match command {
            RegistryCommand::TransferOwnership { new_owner } => {
                self.transfer_ownership(ctx, new_owner)?;
                Ok(CommandOutcome::Done)
            }
            RegistryCommand::Destroy => {
                self.destroy(ctx)?;
                Ok(CommandOutcome::Done)
            }
            RegistryCommand::AddManager { manager } => {
                let changed = self.add_manager(ctx, manager)?;
                Ok(CommandOutcome::MembershipChanged { changed })
            }
            RegistryCommand::RemoveManager { manager } => {
                let changed = self.remove_manager(ctx, manager)?;
                Ok(CommandOutcome::MembershipChanged { changed })
            }
            RegistryCommand::Pause => {
                let changed = self.pause(ctx)?;
                Ok(CommandOutcome::PauseChanged { changed })
            }
            RegistryCommand::Unpause => {
                let changed = self.unpause(ctx)?;
                Ok(CommandOutcome::PauseChanged { changed })
            }
            RegistryCommand::ChangeEscrowAmount { amount } => {
                self.change_escrow_amount(ctx, amount)?;
                Ok(CommandOutcome::Done)
            }
            RegistryCommand::CreateCampaign { name, content_id } => {
                let campaign_id = self.create_campaign(ctx, name, content_id)?;
                Ok(CommandOutcome::CampaignCreated { campaign_id })
            }
            RegistryCommand::ActivateCampaign { campaign_id } => {
                self.activate_campaign(ctx, campaign_id)?;
                Ok(CommandOutcome::Done)
            }
            RegistryCommand::CreateCertificate {
                campaign_id,
                quantity,
                name,
                price,
            } => {
                let index = self.create_certificate(ctx, campaign_id, quantity, name, price)?;
                Ok(CommandOutcome::CertificateCreated { campaign_id, index })
            }
            RegistryCommand::UpdateCertificate {
                campaign_id,
                index,
                quantity,
                name,
                price,
            } => {
                self.update_certificate(ctx, campaign_id, index, quantity, name, price)?;
                Ok(CommandOutcome::Done)
            }
            RegistryCommand::CreateToken { campaign_id, index } => {
                let token_id = self.create_token(ctx, campaign_id, index)?;
                Ok(CommandOutcome::TokenCreated { token_id })
            }
        }
    }
}
