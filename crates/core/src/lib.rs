//! `wastenot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod receipt;

pub use entity::{Entity, Persistable};
pub use error::{RepositoryError, ServiceError, ServiceResult};
pub use id::{ForeignKeyId, HouseholdId, MemberId, ProviderId, TranslationId};
pub use receipt::ServiceReceipt;
