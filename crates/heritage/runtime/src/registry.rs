//! Registry: campaigns, certificates and tokens
//!
//! The registry composes the access, pause and escrow components with the
//! entity arenas. Every mutating call runs its checks in a fixed order
//! (pause, role, value, arguments, existence) and only then writes, so a
//! rejected call leaves no trace. Owner-only admin calls check the role
//! before the pause flag. Arenas are append-only: an entity's id is
//! its position and nothing is ever removed.

use crate::{access_control::AccessControl, escrow_policy::EscrowPolicy, pause_switch::PauseSwitch};
use heritage_types::{
    Action, Amount, AssetDescriptor, CallContext, Campaign, CampaignId, Certificate,
    CertificateIndex, EntityRef, EventJournal, Identity, Ownership, RegistryConfig,
    RegistryError, RegistryEvent, RegistryReceipt, RegistryResult, Token, TokenId,
};
use tracing::{debug, info, warn};

/// The registry state machine
#[derive(Clone, Debug)]
pub struct Registry {
    /// Owner, founder, managers
    pub(crate) access: AccessControl,
    /// Global halt flag
    pub(crate) pause: PauseSwitch,
    /// Campaign creation threshold
    pub(crate) escrow: EscrowPolicy,
    /// Campaign arena; each campaign owns its certificate arena
    pub(crate) campaigns: Vec<Campaign>,
    /// Global token arena
    pub(crate) tokens: Vec<Token>,
    /// Receipts for committed mutations
    pub(crate) journal: EventJournal,
}

impl Registry {
    /// Deploy a registry with the default configuration
    pub fn new(deployer: Identity) -> RegistryResult<Self> {
        Self::with_config(deployer, RegistryConfig::default())
    }

    /// Deploy a registry, seeding the genesis campaign, certificate and token.
    ///
    /// The genesis campaign starts active: it has no creator call to
    /// activate it and its certificate set is closed at construction.
    pub fn with_config(deployer: Identity, config: RegistryConfig) -> RegistryResult<Self> {
        if deployer.is_zero() {
            return Err(RegistryError::InvalidArgument(
                "deployer must not be the zero address".into(),
            ));
        }
        config.validate()?;

        let genesis = &config.genesis;
        let mut campaign = Campaign::new(
            CampaignId::GENESIS,
            genesis.campaign_name.clone(),
            genesis.content_id.clone(),
            deployer,
        );
        campaign.activate();

        let mut certificate = Certificate::new(
            CampaignId::GENESIS,
            CertificateIndex(0),
            genesis.certificate_quantity,
            genesis.certificate_name.clone(),
            genesis.certificate_price,
        );
        certificate.record_issue();
        campaign.certificates.push(certificate);

        let token = Token::new(
            TokenId::GENESIS,
            CampaignId::GENESIS,
            CertificateIndex(0),
            deployer,
            Amount::zero(),
        );

        let mut journal = EventJournal::new();
        journal.record(
            deployer,
            RegistryEvent::CampaignCreated {
                campaign_id: CampaignId::GENESIS,
                creator: deployer,
                escrow_posted: Amount::zero(),
            },
        );
        journal.record(
            deployer,
            RegistryEvent::CertificateCreated {
                campaign_id: CampaignId::GENESIS,
                index: CertificateIndex(0),
                quantity: genesis.certificate_quantity,
                price: genesis.certificate_price,
            },
        );
        journal.record(
            deployer,
            RegistryEvent::TokenCreated {
                token_id: TokenId::GENESIS,
                campaign_id: CampaignId::GENESIS,
                index: CertificateIndex(0),
                holder: deployer,
                value: Amount::zero(),
            },
        );

        info!(
            deployer = %deployer,
            escrow = config.initial_escrow.0,
            "Registry deployed"
        );

        Ok(Self {
            access: AccessControl::new(deployer),
            pause: PauseSwitch::new(),
            escrow: EscrowPolicy::new(config.initial_escrow),
            campaigns: vec![campaign],
            tokens: vec![token],
            journal,
        })
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    /// Hand the owner role to another identity. Allowed while paused.
    pub fn transfer_ownership(&mut self, ctx: &CallContext, new_owner: Identity) -> RegistryResult<()> {
        self.access
            .transfer_ownership(&ctx.caller, new_owner, &mut self.journal)
    }

    /// Permanently clear ownership. Allowed while paused.
    pub fn destroy(&mut self, ctx: &CallContext) -> RegistryResult<()> {
        self.access.destroy(&ctx.caller, &mut self.journal)
    }

    /// Owner-gated admin calls check the role before the pause flag, so a
    /// destroyed registry answers `Unauthorized` whether or not it is paused.
    pub fn add_manager(&mut self, ctx: &CallContext, manager: Identity) -> RegistryResult<bool> {
        self.access.ensure_owner(&ctx.caller, Action::AddManager)?;
        self.pause.ensure_running()?;
        self.access.add_manager(&ctx.caller, manager, &mut self.journal)
    }

    pub fn remove_manager(&mut self, ctx: &CallContext, manager: Identity) -> RegistryResult<bool> {
        self.access.ensure_owner(&ctx.caller, Action::RemoveManager)?;
        self.pause.ensure_running()?;
        self.access
            .remove_manager(&ctx.caller, manager, &mut self.journal)
    }

    pub fn pause(&mut self, ctx: &CallContext) -> RegistryResult<bool> {
        self.pause.pause(&ctx.caller, &self.access, &mut self.journal)
    }

    pub fn unpause(&mut self, ctx: &CallContext) -> RegistryResult<bool> {
        self.pause
            .unpause(&ctx.caller, &self.access, &mut self.journal)
    }

    pub fn change_escrow_amount(&mut self, ctx: &CallContext, amount: Amount) -> RegistryResult<()> {
        self.access.ensure_owner(&ctx.caller, Action::ChangeEscrowAmount)?;
        self.pause.ensure_running()?;
        self.escrow
            .change_escrow_amount(&ctx.caller, amount, &self.access, &mut self.journal)
    }

    // =========================================================================
    // CAMPAIGNS
    // =========================================================================

    /// Open a new, inactive campaign owned by the caller.
    ///
    /// The caller must be a manager or the owner and must post at least the
    /// current escrow threshold as `ctx.value`.
    pub fn create_campaign(
        &mut self,
        ctx: &CallContext,
        name: impl Into<String>,
        content_id: impl Into<String>,
    ) -> RegistryResult<CampaignId> {
        self.pause.ensure_running()?;
        if !self.access.can_create_campaign(&ctx.caller) {
            warn!(caller = %ctx.caller, "Campaign creation by non-manager rejected");
            return Err(RegistryError::unauthorized(ctx.caller, Action::CreateCampaign));
        }
        self.escrow.check(ctx.value)?;

        let id = CampaignId(self.campaigns.len() as u64);
        let campaign = Campaign::new(id, name, content_id, ctx.caller).with_escrow(ctx.value);

        info!(
            campaign = %id,
            name = %campaign.name,
            creator = %ctx.caller,
            escrow = ctx.value.0,
            "Campaign created"
        );

        self.campaigns.push(campaign);
        self.journal.record(
            ctx.caller,
            RegistryEvent::CampaignCreated {
                campaign_id: id,
                creator: ctx.caller,
                escrow_posted: ctx.value,
            },
        );
        Ok(id)
    }

    /// Mark a campaign active. Only its creator or the owner may do so.
    pub fn activate_campaign(&mut self, ctx: &CallContext, campaign_id: CampaignId) -> RegistryResult<()> {
        self.pause.ensure_running()?;
        let is_owner = self.access.is_owner(&ctx.caller);
        let campaign = self.campaign_mut(campaign_id)?;
        if !campaign.is_creator(&ctx.caller) && !is_owner {
            warn!(caller = %ctx.caller, campaign = %campaign_id, "Activation rejected");
            return Err(RegistryError::unauthorized(ctx.caller, Action::ActivateCampaign));
        }

        if campaign.active {
            debug!(campaign = %campaign_id, "Campaign already active");
            return Ok(());
        }
        campaign.activate();

        info!(campaign = %campaign_id, caller = %ctx.caller, "Campaign activated");
        self.journal
            .record(ctx.caller, RegistryEvent::CampaignActivated { campaign_id });
        Ok(())
    }

    pub fn get_campaign(&self, campaign_id: CampaignId) -> RegistryResult<&Campaign> {
        campaign_id
            .as_index()
            .and_then(|i| self.campaigns.get(i))
            .ok_or(RegistryError::NotFound(EntityRef::Campaign(campaign_id)))
    }

    pub fn campaign_balance(&self, campaign_id: CampaignId) -> RegistryResult<Amount> {
        Ok(self.get_campaign(campaign_id)?.balance)
    }

    /// Number of campaigns, genesis included
    pub fn total_campaigns(&self) -> u64 {
        self.campaigns.len() as u64
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn campaigns_by_creator(&self, creator: &Identity) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|c| c.is_creator(creator))
            .collect()
    }

    fn campaign_mut(&mut self, campaign_id: CampaignId) -> RegistryResult<&mut Campaign> {
        campaign_id
            .as_index()
            .and_then(|i| self.campaigns.get_mut(i))
            .ok_or(RegistryError::NotFound(EntityRef::Campaign(campaign_id)))
    }

    /// The campaign, provided `caller` created it
    fn campaign_for_creator(
        &mut self,
        caller: &Identity,
        campaign_id: CampaignId,
        action: Action,
    ) -> RegistryResult<&mut Campaign> {
        let campaign = self.campaign_mut(campaign_id)?;
        if !campaign.is_creator(caller) {
            warn!(
                caller = %caller,
                campaign = %campaign_id,
                action = %action,
                "Caller is not the campaign creator"
            );
            return Err(RegistryError::unauthorized(*caller, action));
        }
        Ok(campaign)
    }

    // =========================================================================
    // CERTIFICATES
    // =========================================================================

    /// Append a certificate to a campaign the caller created.
    ///
    /// The genesis campaign's certificates are fixed at construction.
    pub fn create_certificate(
        &mut self,
        ctx: &CallContext,
        campaign_id: CampaignId,
        quantity: u64,
        name: impl Into<String>,
        price: Amount,
    ) -> RegistryResult<CertificateIndex> {
        self.pause.ensure_running()?;
        if campaign_id.is_genesis() {
            return Err(RegistryError::InvalidArgument(
                "certificates cannot be added to the genesis campaign".into(),
            ));
        }

        let campaign =
            self.campaign_for_creator(&ctx.caller, campaign_id, Action::CreateCertificate)?;
        let index = campaign
            .next_certificate_index()
            .ok_or(RegistryError::ArithmeticOverflow)?;
        let certificate = Certificate::new(campaign_id, index, quantity, name, price);

        info!(
            campaign = %campaign_id,
            certificate = %index,
            name = %certificate.name,
            quantity = quantity,
            price = price.0,
            "Certificate created"
        );

        campaign.certificates.push(certificate);
        self.journal.record(
            ctx.caller,
            RegistryEvent::CertificateCreated {
                campaign_id,
                index,
                quantity,
                price,
            },
        );
        Ok(index)
    }

    /// Overwrite a certificate's quantity, name and price
    pub fn update_certificate(
        &mut self,
        ctx: &CallContext,
        campaign_id: CampaignId,
        index: CertificateIndex,
        quantity: u64,
        name: impl Into<String>,
        price: Amount,
    ) -> RegistryResult<()> {
        self.pause.ensure_running()?;

        let campaign =
            self.campaign_for_creator(&ctx.caller, campaign_id, Action::UpdateCertificate)?;
        let certificate = campaign
            .certificate_mut(index)
            .ok_or(RegistryError::NotFound(EntityRef::Certificate(campaign_id, index)))?;
        certificate.update_terms(quantity, name, price);

        info!(
            campaign = %campaign_id,
            certificate = %index,
            quantity = quantity,
            price = price.0,
            "Certificate updated"
        );

        self.journal.record(
            ctx.caller,
            RegistryEvent::CertificateUpdated {
                campaign_id,
                index,
                quantity,
                price,
            },
        );
        Ok(())
    }

    pub fn get_certificate(
        &self,
        campaign_id: CampaignId,
        index: CertificateIndex,
    ) -> RegistryResult<&Certificate> {
        self.get_campaign(campaign_id)?
            .certificate(index)
            .ok_or(RegistryError::NotFound(EntityRef::Certificate(campaign_id, index)))
    }

    pub fn total_certificates(&self, campaign_id: CampaignId) -> RegistryResult<u64> {
        Ok(self.get_campaign(campaign_id)?.certificate_count() as u64)
    }

    // =========================================================================
    // TOKENS
    // =========================================================================

    /// Mint a token against a certificate, paying `ctx.value`.
    ///
    /// The full value paid is credited to the campaign balance, not just
    /// the certificate price.
    pub fn create_token(
        &mut self,
        ctx: &CallContext,
        campaign_id: CampaignId,
        index: CertificateIndex,
    ) -> RegistryResult<TokenId> {
        self.pause.ensure_running()?;

        let token_id = TokenId(self.tokens.len() as u64);
        let campaign = self.campaign_mut(campaign_id)?;
        let certificate = campaign
            .certificate(index)
            .ok_or(RegistryError::NotFound(EntityRef::Certificate(campaign_id, index)))?;
        let price = certificate.price;
        if !certificate.accepts(ctx.value) {
            warn!(
                campaign = %campaign_id,
                certificate = %index,
                required = price.0,
                paid = ctx.value.0,
                "Token payment below certificate price"
            );
            return Err(RegistryError::InsufficientPayment {
                required: price,
                paid: ctx.value,
            });
        }
        let balance = campaign
            .balance
            .checked_add(ctx.value)
            .ok_or(RegistryError::ArithmeticOverflow)?;

        // All checks passed
        campaign.balance = balance;
        if let Some(certificate) = campaign.certificate_mut(index) {
            certificate.record_issue();
        }
        self.tokens.push(Token::new(
            token_id,
            campaign_id,
            index,
            ctx.caller,
            ctx.value,
        ));

        info!(
            token = %token_id,
            campaign = %campaign_id,
            certificate = %index,
            holder = %ctx.caller,
            value = ctx.value.0,
            "Token created"
        );

        self.journal.record(
            ctx.caller,
            RegistryEvent::TokenCreated {
                token_id,
                campaign_id,
                index,
                holder: ctx.caller,
                value: ctx.value,
            },
        );
        Ok(token_id)
    }

    pub fn get_token(&self, token_id: TokenId) -> RegistryResult<&Token> {
        usize::try_from(token_id.0)
            .ok()
            .and_then(|i| self.tokens.get(i))
            .ok_or(RegistryError::NotFound(EntityRef::Token(token_id)))
    }

    /// Number of tokens, genesis included
    pub fn total_tokens(&self) -> u64 {
        self.tokens.len() as u64
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_of(&self, holder: &Identity) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.holder == *holder).collect()
    }

    // =========================================================================
    // ROLE & POLICY QUERIES
    // =========================================================================

    pub fn owner(&self) -> Identity {
        self.access.owner()
    }

    pub fn ownership(&self) -> Ownership {
        self.access.ownership()
    }

    pub fn founder(&self) -> Identity {
        self.access.founder()
    }

    pub fn is_manager(&self, identity: &Identity) -> bool {
        self.access.is_manager(identity)
    }

    pub fn managers(&self) -> impl Iterator<Item = &Identity> {
        self.access.managers()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn required_escrow(&self) -> Amount {
        self.escrow.required_escrow()
    }

    pub fn asset(&self) -> AssetDescriptor {
        AssetDescriptor::HERITAGE
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Take the receipts recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<RegistryReceipt> {
        self.journal.drain()
    }
}
