//! Receipt mapper over any entity.

use chrono::Utc;
use uuid::Uuid;

use wastenot_core::{Entity, ServiceReceipt};
use wastenot_handlers::ReceiptMapper;

/// Maps a persisted entity onto a fresh receipt: the entity's identifier and
/// the moment of mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemReceiptMapper;

impl SystemReceiptMapper {
    pub fn new() -> Self {
        Self
    }
}

impl<E> ReceiptMapper<E> for SystemReceiptMapper
where
    E: Entity,
    E::Id: Into<Uuid>,
{
    // Receipts render culture-invariantly; the culture parameter is accepted
    // for the collaborator contract and unused here.
    fn map(&self, entity: &E, _culture: Option<&str>) -> ServiceReceipt {
        ServiceReceipt::new(entity.id().map(Into::into), Utc::now())
    }
}
