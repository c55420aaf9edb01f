//! In-memory repository.

use core::any::type_name;
use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use wastenot_core::{Persistable, RepositoryError};
use wastenot_handlers::Repository;

/// In-memory entity store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryRepository<E: Persistable> {
    entities: RwLock<HashMap<E::Id, E>>,
}

impl<E: Persistable> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Persistable> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Persistable + Send + Sync,
    E::Id: From<Uuid> + Send + Sync,
{
    fn get(&self, id: E::Id) -> Result<E, RepositoryError> {
        let entities = self
            .entities
            .read()
            .map_err(|_| RepositoryError::backend("lock poisoned"))?;
        entities
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(type_name::<E>(), format!("{id:?}")))
    }

    fn insert(&self, entity: E) -> Result<E, RepositoryError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|_| RepositoryError::backend("lock poisoned"))?;

        let id = match entity.id() {
            Some(id) => {
                if entities.contains_key(&id) {
                    return Err(RepositoryError::conflict(format!(
                        "{} already persisted: {id:?}",
                        type_name::<E>()
                    )));
                }
                id
            }
            // The store owns identifier assignment.
            None => E::Id::from(Uuid::now_v7()),
        };

        let entity = entity.with_id(id);
        entities.insert(id, entity.clone());
        Ok(entity)
    }

    fn update(&self, entity: E) -> Result<E, RepositoryError> {
        let Some(id) = entity.id() else {
            return Err(RepositoryError::conflict(format!(
                "cannot update a {} without an identifier",
                type_name::<E>()
            )));
        };

        let mut entities = self
            .entities
            .write()
            .map_err(|_| RepositoryError::backend("lock poisoned"))?;
        if !entities.contains_key(&id) {
            return Err(RepositoryError::not_found(type_name::<E>(), format!("{id:?}")));
        }
        entities.insert(id, entity.clone());
        Ok(entity)
    }

    fn delete(&self, entity: E) -> Result<(), RepositoryError> {
        let Some(id) = entity.id() else {
            return Err(RepositoryError::conflict(format!(
                "cannot delete a {} without an identifier",
                type_name::<E>()
            )));
        };

        let mut entities = self
            .entities
            .write()
            .map_err(|_| RepositoryError::backend("lock poisoned"))?;
        entities
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(type_name::<E>(), format!("{id:?}")))
    }
}
