//! Heritage Registry Domain Types
//!
//! This crate defines the domain types for the Heritage registry: a
//! permissioned ledger of fundraising campaigns, the certificates (reward
//! tiers) each campaign offers, and the tokens (proof-of-contribution
//! receipts) minted against those certificates.
//!
//! # Key Concepts
//!
//! - **Identity**: an opaque 20-byte address. The all-zero address is the
//!   null sentinel and never authorizes anything.
//! - **Ownership**: a single owner, transferable, or permanently
//!   `Destroyed`. Destruction freezes every owner-gated operation.
//! - **Campaign → Certificate → Token**: append-only arenas keyed by
//!   dense sequential ids. Nothing is ever removed or reordered.
//! - **Receipts**: every committed mutation produces a `RegistryReceipt`
//!   in the `EventJournal`.
//!
//! # Architecture
//!
//! This is a pure types crate. The state machine lives in
//! `heritage-runtime`. All records implement `Clone`, `Debug`,
//! `Serialize`, `Deserialize`.

#![deny(unsafe_code)]

mod access;
mod asset;
mod campaign;
mod certificate;
mod command;
mod config;
mod context;
mod errors;
mod event;
mod identity;
mod token;
mod value;

pub use access::*;
pub use asset::*;
pub use campaign::*;
pub use certificate::*;
pub use command::*;
pub use config::*;
pub use context::*;
pub use errors::*;
pub use event::*;
pub use identity::*;
pub use token::*;
pub use value::*;
