//! Handlers for foreign key commands.

use wastenot_core::{Entity, ServiceError, ServiceReceipt};
use wastenot_metadata::{AddForeignKey, DeleteForeignKey, ForeignKey, ModifyForeignKey};
use wastenot_validation::{checks, Specification};

use crate::flow::MutationHandler;
use crate::mapper::ReceiptMapper;
use crate::repository::Repository;

const VALUE_MAX: usize = 4096;

/// Value rules shared by the add and modify paths.
fn value_rules<'a>(spec: Specification<'a>, value: &'a str) -> Specification<'a> {
    spec.is_satisfied_by(
        || checks::has_value(value),
        ServiceError::business("foreign key value must have a value"),
    )
    .is_satisfied_by(
        || checks::is_length_valid(value, 1, VALUE_MAX),
        ServiceError::business(format!(
            "foreign key value must be between 1 and {VALUE_MAX} characters"
        )),
    )
    .is_satisfied_by(
        || !checks::contains_illegal_chars(value),
        ServiceError::business("foreign key value contains illegal characters"),
    )
}

/// Attaches a provider's key to a record.
pub struct AddForeignKeyHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> AddForeignKeyHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for AddForeignKeyHandler<R, M>
where
    R: Repository<ForeignKey>,
    M: ReceiptMapper<ForeignKey>,
{
    type Command = AddForeignKey;
    type Entity = ForeignKey;

    fn prepare(&self, command: &AddForeignKey) -> anyhow::Result<ForeignKey> {
        Ok(ForeignKey::new(
            command.provider_id,
            command.subject_id,
            command.value.clone(),
        ))
    }

    fn validation_rules<'a>(
        &self,
        command: &'a AddForeignKey,
        _entity: &'a ForeignKey,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        value_rules(spec, &command.value)
    }

    fn persist(&self, entity: ForeignKey) -> anyhow::Result<ForeignKey> {
        Ok(self.repository.insert(entity)?)
    }

    fn map(&self, entity: &ForeignKey) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Changes a foreign key's value.
pub struct ModifyForeignKeyHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> ModifyForeignKeyHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for ModifyForeignKeyHandler<R, M>
where
    R: Repository<ForeignKey>,
    M: ReceiptMapper<ForeignKey>,
{
    type Command = ModifyForeignKey;
    type Entity = ForeignKey;

    fn prepare(&self, command: &ModifyForeignKey) -> anyhow::Result<ForeignKey> {
        Ok(self.repository.get(command.foreign_key_id)?)
    }

    fn validation_rules<'a>(
        &self,
        command: &'a ModifyForeignKey,
        _entity: &'a ForeignKey,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        value_rules(spec, &command.value)
    }

    fn apply(&self, command: &ModifyForeignKey, mut entity: ForeignKey) -> ForeignKey {
        entity.set_value(&command.value);
        entity
    }

    fn persist(&self, entity: ForeignKey) -> anyhow::Result<ForeignKey> {
        Ok(self.repository.update(entity)?)
    }

    fn map(&self, entity: &ForeignKey) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

/// Removes a foreign key.
pub struct DeleteForeignKeyHandler<R, M> {
    repository: R,
    mapper: M,
}

impl<R, M> DeleteForeignKeyHandler<R, M> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }
}

impl<R, M> MutationHandler for DeleteForeignKeyHandler<R, M>
where
    R: Repository<ForeignKey>,
    M: ReceiptMapper<ForeignKey>,
{
    type Command = DeleteForeignKey;
    type Entity = ForeignKey;

    fn prepare(&self, command: &DeleteForeignKey) -> anyhow::Result<ForeignKey> {
        Ok(self.repository.get(command.foreign_key_id)?)
    }

    fn validation_rules<'a>(
        &self,
        _command: &'a DeleteForeignKey,
        entity: &'a ForeignKey,
        spec: Specification<'a>,
    ) -> Specification<'a> {
        spec.is_satisfied_by(
            || checks::is_present(&entity.id()),
            ServiceError::business("foreign key carries no identifier"),
        )
    }

    fn persist(&self, entity: ForeignKey) -> anyhow::Result<ForeignKey> {
        self.repository.delete(entity.clone())?;
        Ok(entity)
    }

    fn map(&self, entity: &ForeignKey) -> ServiceReceipt {
        self.mapper.map(entity, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use uuid::Uuid;
    use wastenot_core::{ForeignKeyId, ProviderId, RepositoryError};

    use crate::testkit::{CannedMapper, RecordingRepository};

    type Repo = Arc<RecordingRepository<ForeignKey>>;

    fn fixture() -> (Repo, Arc<CannedMapper>) {
        (
            Arc::new(RecordingRepository::new()),
            Arc::new(CannedMapper::new()),
        )
    }

    #[test]
    fn add_registers_three_value_rules() {
        let (repository, mapper) = fixture();
        let handler = AddForeignKeyHandler::new(repository, mapper);
        let command = AddForeignKey {
            provider_id: ProviderId::new(),
            subject_id: Uuid::now_v7(),
            value: "EXT-42".to_string(),
        };
        let entity = handler.prepare(&command).unwrap();

        let spec = handler.validation_rules(&command, &entity, Specification::new());
        assert_eq!(spec.rule_count(), 3);
    }

    #[test]
    fn modify_registers_three_value_rules() {
        let (repository, mapper) = fixture();
        let id = ForeignKeyId::new();
        repository.seed(
            ForeignKey::new(ProviderId::new(), Uuid::now_v7(), "EXT-42").with_id(id),
        );
        let handler = ModifyForeignKeyHandler::new(repository, mapper);
        let command = ModifyForeignKey {
            foreign_key_id: id,
            value: "EXT-43".to_string(),
        };
        let entity = handler.prepare(&command).unwrap();

        let spec = handler.validation_rules(&command, &entity, Specification::new());
        assert_eq!(spec.rule_count(), 3);
    }

    #[test]
    fn delete_registers_one_rule() {
        let (repository, mapper) = fixture();
        let id = ForeignKeyId::new();
        repository.seed(
            ForeignKey::new(ProviderId::new(), Uuid::now_v7(), "EXT-42").with_id(id),
        );
        let handler = DeleteForeignKeyHandler::new(repository, mapper);
        let command = DeleteForeignKey { foreign_key_id: id };
        let entity = handler.prepare(&command).unwrap();

        let spec = handler.validation_rules(&command, &entity, Specification::new());
        assert_eq!(spec.rule_count(), 1);
    }

    #[test]
    fn modify_fetches_verbatim_id_applies_value_and_updates() {
        let (repository, mapper) = fixture();
        let id = ForeignKeyId::new();
        repository.seed(
            ForeignKey::new(ProviderId::new(), Uuid::now_v7(), "EXT-42").with_id(id),
        );
        let handler = ModifyForeignKeyHandler::new(repository.clone(), mapper.clone());
        let command = ModifyForeignKey {
            foreign_key_id: id,
            value: "EXT-43".to_string(),
        };

        let receipt = handler.execute(&command).unwrap();

        assert_eq!(repository.got_ids(), vec![id]);
        let updated = repository.updated_entities();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].value(), "EXT-43");
        assert_eq!(mapper.call_count(), 1);
        assert_eq!(receipt, mapper.receipt());
    }

    #[test]
    fn modify_rejects_blank_value_before_mutation() {
        let (repository, mapper) = fixture();
        let id = ForeignKeyId::new();
        repository.seed(
            ForeignKey::new(ProviderId::new(), Uuid::now_v7(), "EXT-42").with_id(id),
        );
        let handler = ModifyForeignKeyHandler::new(repository.clone(), mapper);
        let command = ModifyForeignKey {
            foreign_key_id: id,
            value: "  ".to_string(),
        };

        let err = handler.execute(&command).unwrap_err();
        assert!(err.is_business());
        assert_eq!(repository.mutation_count(), 0);
    }

    #[test]
    fn delete_issues_single_delete_and_maps_fetched_entity() {
        let (repository, mapper) = fixture();
        let id = ForeignKeyId::new();
        repository.seed(
            ForeignKey::new(ProviderId::new(), Uuid::now_v7(), "EXT-42").with_id(id),
        );
        let handler = DeleteForeignKeyHandler::new(repository.clone(), mapper.clone());
        let command = DeleteForeignKey { foreign_key_id: id };

        let receipt = handler.execute(&command).unwrap();

        assert_eq!(repository.deleted_entities().len(), 1);
        assert_eq!(repository.mutation_count(), 1);
        assert_eq!(receipt, mapper.receipt());
    }

    #[test]
    fn delete_propagates_store_failure_unchanged() {
        let (repository, mapper) = fixture();
        let id = ForeignKeyId::new();
        repository.seed(
            ForeignKey::new(ProviderId::new(), Uuid::now_v7(), "EXT-42").with_id(id),
        );
        let handler = DeleteForeignKeyHandler::new(repository.clone(), mapper);
        repository.fail_next(RepositoryError::conflict("still referenced"));

        let command = DeleteForeignKey { foreign_key_id: id };
        let err = handler.execute(&command).unwrap_err();
        assert!(err.is_repository());
        assert_eq!(repository.mutation_count(), 0);
    }
}
