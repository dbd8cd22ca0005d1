//! Heritage Registry Runtime
//!
//! The registry state machine: who may open campaigns, what they must post
//! in escrow, whether the registry is halted, and the append-only
//! campaign → certificate → token hierarchy.
//!
//! # Components
//!
//! - [`AccessControl`]: owner (transferable, destroyable), founder, managers
//! - [`PauseSwitch`]: global halt flag
//! - [`EscrowPolicy`]: minimum value posted to open a campaign
//! - [`Registry`]: composes the above with the entity arenas
//!
//! Operations are synchronous `&mut self` transitions. The host sequences
//! calls and supplies a [`CallContext`](heritage_types::CallContext) with the
//! authenticated caller and the posted value.
//!
//! ```
//! use heritage_runtime::Registry;
//! use heritage_types::{Amount, CallContext, CampaignId, CertificateIndex, Identity};
//!
//! let deployer = Identity::derive("deployer");
//! let owner = CallContext::new(deployer);
//! let mut registry = Registry::new(deployer).unwrap();
//!
//! let campaign = registry.create_campaign(&owner, "Test Campaign", "501cid").unwrap();
//! registry
//!     .create_certificate(&owner, campaign, 10, "Test Certificate", Amount::new(10))
//!     .unwrap();
//!
//! let buyer = CallContext::new(Identity::derive("user")).with_value(10u64);
//! registry.create_token(&buyer, campaign, CertificateIndex(0)).unwrap();
//! assert_eq!(registry.campaign_balance(CampaignId(1)).unwrap(), Amount::new(10));
//! ```

#![deny(unsafe_code)]

pub mod access_control;
pub mod escrow_policy;
mod executor;
pub mod pause_switch;
pub mod registry;
pub mod snapshot;

pub use access_control::AccessControl;
pub use escrow_policy::EscrowPolicy;
pub use pause_switch::PauseSwitch;
pub use registry::Registry;
pub use snapshot::RegistrySnapshot;
