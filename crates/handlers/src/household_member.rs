//! Handlers for household member commands.
//!
//! Member-scoped handlers are actor-gated: they expose read-only policy
//! flags and check the acting member against them before the generic flow
//! runs. Registration is the exception — the registering person is not yet
//! an activated member, so its gates are off.

use wastenot_core::{ServiceError, ServiceReceipt};
use wastenot_households::{AddHouseholdMember, HouseholdMember, ModifyHouseholdMember};
use wastenot_validation::{checks, Specification};

use crate::flow::MutationHandler;
use crate::mapper::ReceiptMapper;
use crate::policy::{self, ActorPolicy};
use crate::repository::Repository;

const MAIL_MAX: usize = 128;

/// Mail address rules shared by the add and modify paths.
fn mail_rules<'a>(spec: Specification<'a>, mail_address: &'a str) -> Specification<'a> {
    spec.is_satisfied_by(
        || checks::has_value(mail_address),
        ServiceError::business("mail address must have a value"),
    )
    .is_satisfied_by(
        || checks::is_length_valid(mail_address, 1, MAIL_MAX),
        ServiceError::business(format!(
            "mail address must be between 1 and {MAIL_MAX} characters"
        )),
    )
    .is_satisfied_by(
        || !checks::contains_illegal_chars(mail_address),
        ServiceError::business("mail address contains illegal characters"),
    )
}

/// Registers a household member.
pub struct AddHouseholdMemberHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> AddHouseholdMemberHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> ActorPolicy for AddHouseholdMemberHandler<R, M> {
    // Registration precedes activation and policy acceptance.
    fn require_activated(&self) -> bool {
        false
    }

    fn require_privacy_policy(&self) -> bool {
        false
    }
}

impl<R, M> AddHouseholdMemberHandler<R, M>
where
    R: Repository<HouseholdMember>,
    M: ReceiptMapper<HouseholdMember>,
{
    /// Gate on the acting member, then run the generic flow.
    pub fn execute_as(
        &self,
        actor: &HouseholdMember,
        command: &AddHouseholdMember,
    ) -> Result<ServiceReceipt, ServiceError> {
        policy::enforce(self, actor)?;
        self.execute(command)
    }
}

impl<R, M> MutationHandler for AddHouseholdMemberHandler<R, M>
where
    R: Repository<HouseholdMember>,
    M: ReceiptMapper<HouseholdMember>,
{
    type Command = AddHouseholdMember;
    type Entity = HouseholdMember;

    fn prepare(&self, command: &AddHouseholdMember) -> anyhow::Result<HouseholdMember> {
        Ok(HouseholdMember::new(
            command.mail_address.clone(),
            command.membership,
        ))
    }

    fn validation_rules<'a>(
        &self,
        command: &'a AddHouseholdMember,
        _entity: &'a HouseholdMember,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        mail_rules(spec, &command.mail_address)
    }

    fn persist(&self, entity: HouseholdMember) -> anyhow::Result<HouseholdMember> {
        Ok(self.repository.insert(entity)?)
    }

    fn map(&self, entity: &HouseholdMember) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Changes a member's mail address.
pub struct ModifyHouseholdMemberHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> ModifyHouseholdMemberHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

// Default gates: activated, policy-accepting, basic membership.
impl<R, M> ActorPolicy for ModifyHouseholdMemberHandler<R, M> {}

impl<R, M> ModifyHouseholdMemberHandler<R, M>
where
    R: Repository<HouseholdMember>,
    M: ReceiptMapper<HouseholdMember>,
{
    /// Gate on the acting member, then run the generic flow.
    pub fn execute_as(
        &self,
        actor: &HouseholdMember,
        command: &ModifyHouseholdMember,
    ) -> Result<ServiceReceipt, ServiceError> {
        policy::enforce(self, actor)?;
        self.execute(command)
    }
}

impl<R, M> MutationHandler for ModifyHouseholdMemberHandler<R, M>
where
    R: Repository<HouseholdMember>,
    M: ReceiptMapper<HouseholdMember>,
{
    type Command = ModifyHouseholdMember;
    type Entity = HouseholdMember;

    fn prepare(&self, command: &ModifyHouseholdMember) -> anyhow::Result<HouseholdMember> {
        Ok(self.repository.get(command.member_id)?)
    }

    fn validation_rules<'a>(
        &self,
        command: &'a ModifyHouseholdMember,
        _entity: &'a HouseholdMember,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        mail_rules(spec, &command.mail_address)
    }

    fn apply(
        &self,
        command: &ModifyHouseholdMember,
        mut entity: HouseholdMember,
    ) -> HouseholdMember {
        entity.change_mail_address(&command.mail_address);
        entity
    }

    fn persist(&self, entity: HouseholdMember) -> anyhow::Result<HouseholdMember> {
        Ok(self.repository.update(entity)?)
    }

    fn map(&self, entity: &HouseholdMember) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}
