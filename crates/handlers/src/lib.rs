//! `wastenot-handlers` — command handlers over the repository abstraction.
//!
//! Every handler follows the same execution protocol (see [`flow`]): prepare
//! an entity from the command, accumulate validation rules on a shared
//! specification, evaluate once, apply field mutations, issue exactly one
//! repository call, and map the persisted entity onto a [`ServiceReceipt`].
//! Failures on the non-validation paths funnel through [`fault`] which
//! classifies them into the service error taxonomy.
//!
//! [`ServiceReceipt`]: wastenot_core::ServiceReceipt

pub mod fault;
pub mod flow;
pub mod foreign_key;
pub mod household;
pub mod household_member;
pub mod mapper;
pub mod policy;
pub mod repository;
pub mod translation;

#[cfg(test)]
pub(crate) mod testkit;

pub use fault::{handle_exception, ExceptionBuilder, FaultContext};
pub use flow::MutationHandler;
pub use foreign_key::{AddForeignKeyHandler, DeleteForeignKeyHandler, ModifyForeignKeyHandler};
pub use household::{AddHouseholdHandler, DeleteHouseholdHandler, ModifyHouseholdHandler};
pub use household_member::{AddHouseholdMemberHandler, ModifyHouseholdMemberHandler};
pub use mapper::ReceiptMapper;
pub use policy::ActorPolicy;
pub use repository::Repository;
pub use translation::{AddTranslationHandler, DeleteTranslationHandler, ModifyTranslationHandler};
