//! Handlers for translation commands.

use wastenot_core::{Entity, ServiceError, ServiceReceipt};
use wastenot_metadata::{AddTranslation, DeleteTranslation, ModifyTranslation, Translation};
use wastenot_validation::{checks, Specification};

use crate::flow::MutationHandler;
use crate::mapper::ReceiptMapper;
use crate::repository::Repository;

const VALUE_MAX: usize = 4096;

/// Value rules shared by the add and modify paths.
fn value_rules<'a>(spec: Specification<'a>, value: &'a str) -> Specification<'a> {
    spec.is_satisfied_by(
        || checks::has_value(value),
        ServiceError::business("translation value must have a value"),
    )
    .is_satisfied_by(
        || checks::is_length_valid(value, 1, VALUE_MAX),
        ServiceError::business(format!(
            "translation value must be between 1 and {VALUE_MAX} characters"
        )),
    )
    .is_satisfied_by(
        || !checks::contains_illegal_chars(value),
        ServiceError::business("translation value contains illegal characters"),
    )
}

/// Attaches a translation to a record.
pub struct AddTranslationHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> AddTranslationHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for AddTranslationHandler<R, M>
where
    R: Repository<Translation>,
    M: ReceiptMapper<Translation>,
{
    type Command = AddTranslation;
    type Entity = Translation;

    fn prepare(&self, command: &AddTranslation) -> anyhow::Result<Translation> {
        Ok(Translation::new(
            command.subject_id,
            command.culture.clone(),
            command.value.clone(),
        ))
    }

    fn validation_rules<'a>(
        &self,
        command: &'a AddTranslation,
        _entity: &'a Translation,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        value_rules(spec, &command.value)
    }

    fn persist(&self, entity: Translation) -> anyhow::Result<Translation> {
        Ok(self.repository.insert(entity)?)
    }

    fn map(&self, entity: &Translation) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Changes a translation's value.
pub struct ModifyTranslationHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> ModifyTranslationHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for ModifyTranslationHandler<R, M>
where
    R: Repository<Translation>,
    M: ReceiptMapper<Translation>,
{
    type Command = ModifyTranslation;
    type Entity = Translation;

    fn prepare(&self, command: &ModifyTranslation) -> anyhow::Result<Translation> {
        Ok(self.repository.get(command.translation_id)?)
    }

    fn validation_rules<'a>(
        &self,
        command: &'a ModifyTranslation,
        _entity: &'a Translation,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        value_rules(spec, &command.value)
    }

    fn apply(&self, command: &ModifyTranslation, mut entity: Translation) -> Translation {
        entity.set_value(&command.value);
        entity
    }

    fn persist(&self, entity: Translation) -> anyhow::Result<Translation> {
        Ok(self.repository.update(entity)?)
    }

    fn map(&self, entity: &Translation) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Removes a translation.
pub struct DeleteTranslationHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> DeleteTranslationHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for DeleteTranslationHandler<R, M>
where
    R: Repository<Translation>,
    M: ReceiptMapper<Translation>,
{
    type Command = DeleteTranslation;
    type Entity = Translation;

    fn prepare(&self, command: &DeleteTranslation) -> anyhow::Result<Translation> {
        Ok(self.repository.get(command.translation_id)?)
    }

    fn validation_rules<'a>(
        &self,
        _command: &'a DeleteTranslation,
        entity: &'a Translation,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        spec.is_satisfied_by(
            || checks::is_present(&entity.id()),
            ServiceError::business("translation carries no identifier"),
        )
    }

    fn persist(&self, entity: Translation) -> anyhow::Result<Translation> {
        self.repository.delete(entity.clone())?;
        Ok(entity)
    }

    fn map(&self, entity: &Translation) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}
