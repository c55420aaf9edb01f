//! Actor precondition gates for member-scoped handlers.

use wastenot_core::ServiceError;
use wastenot_households::{HouseholdMember, Membership};

/// Read-only policy flags a member-scoped handler exposes: what the acting
/// household member must satisfy before the generic flow runs.
pub trait ActorPolicy {
    /// Whether the actor must already be activated.
    fn require_activated(&self) -> bool {
        true
    }

    /// Whether the actor must have accepted the privacy policy.
    fn require_privacy_policy(&self) -> bool {
        true
    }

    /// Minimum membership tier required of the actor.
    fn minimum_membership(&self) -> Membership {
        Membership::Basic
    }
}

/// Check the gates in order: activation, privacy policy, membership tier.
/// Evaluated before the generic flow; no repository call happens when a gate
/// rejects.
pub fn enforce(policy: &impl ActorPolicy, actor: &HouseholdMember) -> Result<(), ServiceError> {
    if policy.require_activated() && !actor.is_activated() {
        return Err(ServiceError::business("household member is not activated"));
    }
    if policy.require_privacy_policy() && !actor.has_accepted_privacy_policy() {
        return Err(ServiceError::business(
            "household member has not accepted the privacy policy",
        ));
    }
    if !actor.has_required_membership(policy.minimum_membership()) {
        return Err(ServiceError::business(
            "household member's membership does not meet the required tier",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct DeluxeOnly;

    impl ActorPolicy for DeluxeOnly {
        fn minimum_membership(&self) -> Membership {
            Membership::Deluxe
        }
    }

    fn accepted_actor(membership: Membership) -> HouseholdMember {
        let mut actor = HouseholdMember::new("actor@example.com", membership);
        actor.activate(Utc::now());
        actor.accept_privacy_policy(Utc::now());
        actor
    }

    #[test]
    fn rejects_non_activated_actor_first() {
        let actor = HouseholdMember::new("actor@example.com", Membership::Premium);
        let err = enforce(&DeluxeOnly, &actor).unwrap_err();
        match err {
            ServiceError::Business(msg) => assert!(msg.contains("not activated")),
            _ => panic!("Expected Business error for non-activated actor"),
        }
    }

    #[test]
    fn rejects_actor_without_privacy_acceptance() {
        let mut actor = HouseholdMember::new("actor@example.com", Membership::Premium);
        actor.activate(Utc::now());
        let err = enforce(&DeluxeOnly, &actor).unwrap_err();
        match err {
            ServiceError::Business(msg) => assert!(msg.contains("privacy policy")),
            _ => panic!("Expected Business error for missing privacy acceptance"),
        }
    }

    #[test]
    fn rejects_actor_below_minimum_membership() {
        let err = enforce(&DeluxeOnly, &accepted_actor(Membership::Basic)).unwrap_err();
        match err {
            ServiceError::Business(msg) => assert!(msg.contains("membership")),
            _ => panic!("Expected Business error for insufficient membership"),
        }
    }

    #[test]
    fn admits_actor_meeting_all_gates() {
        assert!(enforce(&DeluxeOnly, &accepted_actor(Membership::Deluxe)).is_ok());
        assert!(enforce(&DeluxeOnly, &accepted_actor(Membership::Premium)).is_ok());
    }

    struct Ungated;

    impl ActorPolicy for Ungated {
        fn require_activated(&self) -> bool {
            false
        }
        fn require_privacy_policy(&self) -> bool {
            false
        }
    }

    #[test]
    fn disabled_gates_admit_fresh_actor() {
        let actor = HouseholdMember::new("fresh@example.com", Membership::Basic);
        assert!(enforce(&Ungated, &actor).is_ok());
    }
}
