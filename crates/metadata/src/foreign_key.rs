use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wastenot_core::{Entity, ForeignKeyId, Persistable, ProviderId};

/// An external data provider's key for one of our records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    id: Option<ForeignKeyId>,
    provider_id: ProviderId,
    /// Identifier of the domain record the key is attached to.
    subject_id: Uuid,
    value: String,
}

impl ForeignKey {
    /// Create a not-yet-persisted foreign key; the repository assigns the id.
    pub fn new(provider_id: ProviderId, subject_id: Uuid, value: impl Into<String>) -> Self {
        Self {
            id: None,
            provider_id,
            subject_id,
            value: value.into(),
        }
    }

    pub fn provider_id(&self) -> ProviderId {
        self.provider_id
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(mut self, id: ForeignKeyId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for ForeignKey {
    type Id = ForeignKeyId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Persistable for ForeignKey {
    fn with_id(self, id: ForeignKeyId) -> Self {
        ForeignKey::with_id(self, id)
    }
}

/// Command: attach a provider's key to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddForeignKey {
    pub provider_id: ProviderId,
    pub subject_id: Uuid,
    pub value: String,
}

/// Command: change a foreign key's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyForeignKey {
    pub foreign_key_id: ForeignKeyId,
    pub value: String,
}

/// Command: remove a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteForeignKey {
    pub foreign_key_id: ForeignKeyId,
}
