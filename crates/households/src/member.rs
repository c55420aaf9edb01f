use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wastenot_core::{Entity, MemberId, Persistable};

/// Membership tier. Ordering matters: policy gates compare against a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Basic,
    Deluxe,
    Premium,
}

/// A person belonging to one or more households.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdMember {
    id: Option<MemberId>,
    mail_address: String,
    membership: Membership,
    activated_at: Option<DateTime<Utc>>,
    privacy_policy_accepted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl HouseholdMember {
    /// Create a not-yet-persisted member; the repository assigns the id.
    pub fn new(mail_address: impl Into<String>, membership: Membership) -> Self {
        Self {
            id: None,
            mail_address: mail_address.into(),
            membership,
            activated_at: None,
            privacy_policy_accepted_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn mail_address(&self) -> &str {
        &self.mail_address
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    pub fn activated_at(&self) -> Option<DateTime<Utc>> {
        self.activated_at
    }

    pub fn is_activated(&self) -> bool {
        self.activated_at.is_some()
    }

    pub fn has_accepted_privacy_policy(&self) -> bool {
        self.privacy_policy_accepted_at.is_some()
    }

    /// Whether this member's tier meets the given minimum.
    pub fn has_required_membership(&self, minimum: Membership) -> bool {
        self.membership >= minimum
    }

    pub fn activate(&mut self, at: DateTime<Utc>) {
        self.activated_at = Some(at);
    }

    pub fn accept_privacy_policy(&mut self, at: DateTime<Utc>) {
        self.privacy_policy_accepted_at = Some(at);
    }

    pub fn change_mail_address(&mut self, mail_address: impl Into<String>) {
        self.mail_address = mail_address.into();
    }

    pub fn upgrade_membership(&mut self, membership: Membership) {
        self.membership = membership;
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(mut self, id: MemberId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for HouseholdMember {
    type Id = MemberId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Persistable for HouseholdMember {
    fn with_id(self, id: MemberId) -> Self {
        HouseholdMember::with_id(self, id)
    }
}

/// Command: register a household member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddHouseholdMember {
    pub mail_address: String,
    pub membership: Membership,
}

/// Command: change a member's mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyHouseholdMember {
    pub member_id: MemberId,
    pub mail_address: String,
}
