//! Repository abstraction the handlers persist through.

use wastenot_core::{Entity, RepositoryError};

/// Fetch/insert/update/delete against persisted entities.
///
/// Leaf dependency of every handler. Implementations must be safe for
/// concurrent reuse by the hosting framework (`Send + Sync`); each handler
/// issues exactly one mutation per successful execute.
pub trait Repository<E: Entity>: Send + Sync {
    /// Fetch an entity by identifier.
    fn get(&self, id: E::Id) -> Result<E, RepositoryError>;

    /// Persist a new entity. The store assigns the identifier; the returned
    /// entity carries it.
    fn insert(&self, entity: E) -> Result<E, RepositoryError>;

    /// Persist changes to an existing entity.
    fn update(&self, entity: E) -> Result<E, RepositoryError>;

    /// Remove an entity.
    fn delete(&self, entity: E) -> Result<(), RepositoryError>;
}

impl<E: Entity, T: Repository<E> + ?Sized> Repository<E> for std::sync::Arc<T> {
    fn get(&self, id: E::Id) -> Result<E, RepositoryError> {
        (**self).get(id)
    }

    fn insert(&self, entity: E) -> Result<E, RepositoryError> {
        (**self).insert(entity)
    }

    fn update(&self, entity: E) -> Result<E, RepositoryError> {
        (**self).update(entity)
    }

    fn delete(&self, entity: E) -> Result<(), RepositoryError> {
        (**self).delete(entity)
    }
}
