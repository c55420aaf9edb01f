//! `wastenot-metadata` — foreign keys and translations attached to domain data.

pub mod foreign_key;
pub mod translation;

pub use foreign_key::{AddForeignKey, DeleteForeignKey, ForeignKey, ModifyForeignKey};
pub use translation::{AddTranslation, DeleteTranslation, ModifyTranslation, Translation};
