use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wastenot_core::{Entity, HouseholdId, Persistable};

/// A household managing its food-waste data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    id: Option<HouseholdId>,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Household {
    /// Create a not-yet-persisted household; the repository assigns the id.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn describe(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(mut self, id: HouseholdId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Household {
    type Id = HouseholdId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Persistable for Household {
    fn with_id(self, id: HouseholdId) -> Self {
        Household::with_id(self, id)
    }
}

/// Command: create a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddHousehold {
    pub name: String,
    /// Contributes validation rules only when present.
    pub description: Option<String>,
}

/// Command: change a household's name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyHousehold {
    pub household_id: HouseholdId,
    pub name: String,
    pub description: Option<String>,
}

/// Command: remove a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHousehold {
    pub household_id: HouseholdId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_household_has_no_identifier() {
        let household = Household::new("Kitchen", None);
        assert_eq!(household.id(), None);
        assert_eq!(household.name(), "Kitchen");
        assert_eq!(household.description(), None);
    }

    #[test]
    fn with_id_attaches_identifier() {
        let id = HouseholdId::new();
        let household = Household::new("Kitchen", None).with_id(id);
        assert_eq!(household.id(), Some(id));
    }

    #[test]
    fn rename_and_describe_mutate_fields() {
        let mut household = Household::new("Old", Some("old blurb".to_string()));
        household.rename("New");
        household.describe(None);
        assert_eq!(household.name(), "New");
        assert_eq!(household.description(), None);
    }
}
