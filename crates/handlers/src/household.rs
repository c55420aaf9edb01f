//! Handlers for household commands.

use wastenot_core::{Entity, ServiceError, ServiceReceipt};
use wastenot_households::{AddHousehold, DeleteHousehold, Household, ModifyHousehold};
use wastenot_validation::{checks, Specification};

use crate::flow::MutationHandler;
use crate::mapper::ReceiptMapper;
use crate::repository::Repository;

const NAME_MAX: usize = 64;
const DESCRIPTION_MAX: usize = 2048;

/// Name rules shared by the add and modify paths: present, bounded, clean.
fn name_rules<'a>(spec: Specification<'a>, name: &'a str) -> Specification<'a> {
    spec.is_satisfied_by(
        || checks::has_value(name),
        ServiceError::business("household name must have a value"),
    )
    .is_satisfied_by(
        || checks::is_length_valid(name, 1, NAME_MAX),
        ServiceError::business(format!(
            "household name must be between 1 and {NAME_MAX} characters"
        )),
    )
    .is_satisfied_by(
        || !checks::contains_illegal_chars(name),
        ServiceError::business("household name contains illegal characters"),
    )
}

/// Description rules, registered only when the command carries a description.
fn description_rules<'a>(
    spec: Specification<'a>,
    description: Option<&'a str>,
) -> Specification<'a> {
    let Some(description) = description else {
        return spec;
    };
    spec.is_satisfied_by(
        || checks::has_value(description),
        ServiceError::business("household description must have a value"),
    )
    .is_satisfied_by(
        || checks::is_length_valid(description, 1, DESCRIPTION_MAX),
        ServiceError::business(format!(
            "household description must be between 1 and {DESCRIPTION_MAX} characters"
        )),
    )
    .is_satisfied_by(
        || !checks::contains_illegal_chars(description),
        ServiceError::business("household description contains illegal characters"),
    )
}

/// Creates a household.
pub struct AddHouseholdHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> AddHouseholdHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for AddHouseholdHandler<R, M>
where
    R: Repository<Household>,
    M: ReceiptMapper<Household>,
{
    type Command = AddHousehold;
    type Entity = Household;

    fn prepare(&self, command: &AddHousehold) -> anyhow::Result<Household> {
        Ok(Household::new(
            command.name.clone(),
            command.description.clone(),
        ))
    }

    fn validation_rules<'a>(
        &self,
        command: &'a AddHousehold,
        _entity: &'a Household,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        let spec = name_rules(spec, &command.name);
        description_rules(spec, command.description.as_deref())
    }

    fn persist(&self, entity: Household) -> anyhow::Result<Household> {
        Ok(self.repository.insert(entity)?)
    }

    fn map(&self, entity: &Household) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Renames/redescribes an existing household.
pub struct ModifyHouseholdHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> ModifyHouseholdHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for ModifyHouseholdHandler<R, M>
where
    R: Repository<Household>,
    M: ReceiptMapper<Household>,
{
    type Command = ModifyHousehold;
    type Entity = Household;

    fn prepare(&self, command: &ModifyHousehold) -> anyhow::Result<Household> {
        Ok(self.repository.get(command.household_id)?)
    }

    fn validation_rules<'a>(
        &self,
        command: &'a ModifyHousehold,
        _entity: &'a Household,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        let spec = name_rules(spec, &command.name);
        description_rules(spec, command.description.as_deref())
    }

    fn apply(&self, command: &ModifyHousehold, mut entity: Household) -> Household {
        entity.rename(&command.name);
        entity.describe(command.description.clone());
        entity
    }

    fn persist(&self, entity: Household) -> anyhow::Result<Household> {
        Ok(self.repository.update(entity)?)
    }

    fn map(&self, entity: &Household) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Removes a household.
pub struct DeleteHouseholdHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> DeleteHouseholdHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for DeleteHouseholdHandler<R, M>
where
    R: Repository<Household>,
    M: ReceiptMapper<Household>,
{
    type Command = DeleteHousehold;
    type Entity = Household;

    fn prepare(&self, command: &DeleteHousehold) -> anyhow::Result<Household> {
        Ok(self.repository.get(command.household_id)?)
    }

    fn validation_rules<'a>(
        &self,
        _command: &'a DeleteHousehold,
        entity: &'a Household,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        spec.is_satisfied_by(
            || checks::is_present(&entity.id()),
            ServiceError::business("household carries no identifier"),
        )
    }

    fn persist(&self, entity: Household) -> anyhow::Result<Household> {
        self.repository.delete(entity.clone())?;
        Ok(entity)
    }

    fn map(&self, entity: &Household) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}
