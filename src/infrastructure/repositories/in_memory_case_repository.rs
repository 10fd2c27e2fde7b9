use crate::domain::case::{
    entity::{AnimalCase, CaseId, CasePatch, NewCase, DEFAULT_STATUS},
    errors::DomainError,
    repository::CaseRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory case registry.
///
/// Cases live in a `BTreeMap` keyed by their sequential id, so iteration
/// order is insertion order and survives deletions in between. A single
/// mutex serializes all mutations; throughput is low enough that finer
/// locking would buy nothing. State does not outlive the process.
pub struct InMemoryCaseRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    cases: BTreeMap<u64, AnimalCase>,
    next_id: u64,
}

impl InMemoryCaseRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                cases: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::InfrastructureError("case store lock poisoned".into()))
    }
}

impl Default for InMemoryCaseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn list(&self) -> Result<Vec<AnimalCase>, DomainError> {
        let inner = self.lock()?;
        Ok(inner.cases.values().cloned().collect())
    }

    async fn create(&self, new_case: NewCase) -> Result<AnimalCase, DomainError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let case = AnimalCase {
            id: CaseId(id),
            description: new_case.description,
            latitude: new_case.latitude,
            longitude: new_case.longitude,
            image_url: new_case.image_url,
            status: DEFAULT_STATUS.to_string(),
        };
        inner.cases.insert(id, case.clone());
        Ok(case)
    }

    async fn find_by_id(&self, id: CaseId) -> Result<Option<AnimalCase>, DomainError> {
        let inner = self.lock()?;
        Ok(inner.cases.get(&id.0).cloned())
    }

    async fn update(
        &self,
        id: CaseId,
        patch: CasePatch,
    ) -> Result<Option<AnimalCase>, DomainError> {
        let mut inner = self.lock()?;
        let Some(case) = inner.cases.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(description) = patch.description {
            case.description = description;
        }
        if let Some(latitude) = patch.latitude {
            case.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            case.longitude = longitude;
        }
        if let Some(image_url) = patch.image_url {
            case.image_url = Some(image_url);
        }
        if let Some(status) = patch.status {
            case.status = status;
        }

        Ok(Some(case.clone()))
    }

    async fn delete(&self, id: CaseId) -> Result<bool, DomainError> {
        let mut inner = self.lock()?;
        Ok(inner.cases.remove(&id.0).is_some())
    }
}
