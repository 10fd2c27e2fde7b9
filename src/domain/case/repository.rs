use super::entity::{AnimalCase, CaseId, CasePatch, NewCase};
use super::errors::DomainError;
use async_trait::async_trait;

/// Registry of reported animal cases.
///
/// Implementations must return cases from `list` in insertion order and
/// assign sequential ids on `create`. The trait is injected through
/// `AppState` so handlers never touch a concrete store and tests can run
/// against a fresh instance.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<AnimalCase>, DomainError>;
    async fn create(&self, new_case: NewCase) -> Result<AnimalCase, DomainError>;
    async fn find_by_id(&self, id: CaseId) -> Result<Option<AnimalCase>, DomainError>;
    async fn update(&self, id: CaseId, patch: CasePatch)
        -> Result<Option<AnimalCase>, DomainError>;
    async fn delete(&self, id: CaseId) -> Result<bool, DomainError>;
}
