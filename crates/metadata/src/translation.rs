use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wastenot_core::{Entity, Persistable, TranslationId};

/// A localized value attached to a domain record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    id: Option<TranslationId>,
    /// Identifier of the domain record the translation belongs to.
    subject_id: Uuid,
    /// Culture tag, e.g. "da-DK".
    culture: String,
    value: String,
}

impl Translation {
    /// Create a not-yet-persisted translation; the repository assigns the id.
    pub fn new(subject_id: Uuid, culture: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            subject_id,
            culture: culture.into(),
            value: value.into(),
        }
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub fn culture(&self) -> &str {
        &self.culture
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(mut self, id: TranslationId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Translation {
    type Id = TranslationId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Persistable for Translation {
    fn with_id(self, id: TranslationId) -> Self {
        Translation::with_id(self, id)
    }
}

/// Command: attach a translation to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTranslation {
    pub subject_id: Uuid,
    pub culture: String,
    pub value: String,
}

/// Command: change a translation's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyTranslation {
    pub translation_id: TranslationId,
    pub value: String,
}

/// Command: remove a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTranslation {
    pub translation_id: TranslationId,
}
