//! Recording collaborator doubles shared by the handler tests.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use wastenot_core::{Entity, Persistable, RepositoryError, ServiceReceipt};

use crate::mapper::ReceiptMapper;
use crate::repository::Repository;

/// Repository double that records every call. `get` serves a seeded entity;
/// `fail_next` makes the next call return the given error.
pub struct RecordingRepository<E: Persistable> {
    seeded: Mutex<Option<E>>,
    got: Mutex<Vec<E::Id>>,
    inserted: Mutex<Vec<E>>,
    updated: Mutex<Vec<E>>,
    deleted: Mutex<Vec<E>>,
    fail_next: Mutex<Option<RepositoryError>>,
}

impl<E: Persistable> RecordingRepository<E> {
    pub fn new() -> Self {
        Self {
            seeded: Mutex::new(None),
            got: Mutex::new(Vec::new()),
            inserted: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    pub fn seed(&self, entity: E) {
        *self.seeded.lock().unwrap() = Some(entity);
    }

    pub fn fail_next(&self, err: RepositoryError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    fn take_failure(&self) -> Option<RepositoryError> {
        self.fail_next.lock().unwrap().take()
    }

    pub fn got_ids(&self) -> Vec<E::Id> {
        self.got.lock().unwrap().clone()
    }

    pub fn inserted_entities(&self) -> Vec<E> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn updated_entities(&self) -> Vec<E> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted_entities(&self) -> Vec<E> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.inserted.lock().unwrap().len()
            + self.updated.lock().unwrap().len()
            + self.deleted.lock().unwrap().len()
    }
}

impl<E> Repository<E> for RecordingRepository<E>
where
    E: Persistable + Send,
    E::Id: From<Uuid> + Send,
{
    fn get(&self, id: E::Id) -> Result<E, RepositoryError> {
        self.got.lock().unwrap().push(id);
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.seeded
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| RepositoryError::not_found("entity", format!("{id:?}")))
    }

    fn insert(&self, entity: E) -> Result<E, RepositoryError> {
        self.inserted.lock().unwrap().push(entity.clone());
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(entity.with_id(E::Id::from(Uuid::now_v7())))
    }

    fn update(&self, entity: E) -> Result<E, RepositoryError> {
        self.updated.lock().unwrap().push(entity.clone());
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(entity)
    }

    fn delete(&self, entity: E) -> Result<(), RepositoryError> {
        self.deleted.lock().unwrap().push(entity);
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(())
    }
}

/// Mapper double returning a canned receipt and recording each culture it
/// was called with.
pub struct CannedMapper {
    receipt: ServiceReceipt,
    cultures: Mutex<Vec<Option<String>>>,
}

impl CannedMapper {
    pub fn new() -> Self {
        Self {
            receipt: ServiceReceipt::new(Some(Uuid::now_v7()), Utc::now()),
            cultures: Mutex::new(Vec::new()),
        }
    }

    pub fn receipt(&self) -> ServiceReceipt {
        self.receipt.clone()
    }

    pub fn call_count(&self) -> usize {
        self.cultures.lock().unwrap().len()
    }

    pub fn cultures(&self) -> Vec<Option<String>> {
        self.cultures.lock().unwrap().clone()
    }
}

impl<E: Entity> ReceiptMapper<E> for CannedMapper {
    fn map(&self, _entity: &E, culture: Option<&str>) -> ServiceReceipt {
        self.cultures
            .lock()
            .unwrap()
            .push(culture.map(str::to_owned));
        self.receipt.clone()
    }
}
