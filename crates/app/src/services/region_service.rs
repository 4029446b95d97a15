//! Region service: use-cases for managing regions.

use nzwalks_domain::error::{NotFoundError, NzWalksError};
use nzwalks_domain::id::RegionId;
use nzwalks_domain::region::{Region, RegionChanges};

use crate::ports::RegionRepository;

/// Application service for region CRUD operations.
pub struct RegionService<R> {
    repo: R,
}

fn not_found(id: RegionId) -> NzWalksError {
    NotFoundError {
        entity: "Region",
        id: id.to_string(),
    }
    .into()
}

impl<R: RegionRepository> RegionService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all regions. An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_regions(&self) -> Result<Vec<Region>, NzWalksError> {
        self.repo.get_all().await
    }

    /// Look up a region by id.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::NotFound`] when no region with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_region(&self, id: RegionId) -> Result<Region, NzWalksError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Create a new region after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, region), fields(region_code = %region.code))]
    pub async fn create_region(&self, region: Region) -> Result<Region, NzWalksError> {
        region.validate()?;
        let created = self.repo.create(region).await?;
        tracing::info!(region_id = %created.id, "region created");
        Ok(created)
    }

    /// Replace the mutable fields of an existing region.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] if `changes` are invalid,
    /// [`NzWalksError::NotFound`] if no region with `id` exists, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_region(
        &self,
        id: RegionId,
        changes: RegionChanges,
    ) -> Result<Region, NzWalksError> {
        changes.validate()?;
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(region_id = %id, "region updated");
        Ok(updated)
    }

    /// Delete a region by id and return what was removed.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::NotFound`] if no region with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_region(&self, id: RegionId) -> Result<Region, NzWalksError> {
        let deleted = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(region_id = %id, "region deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nzwalks_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRegionRepo {
        store: Mutex<HashMap<RegionId, Region>>,
    }

    impl RegionRepository for InMemoryRegionRepo {
        fn create(
            &self,
            region: Region,
        ) -> impl Future<Output = Result<Region, NzWalksError>> + Send {
            self.store.lock().unwrap().insert(region.id, region.clone());
            async { Ok(region) }
        }

        fn get_by_id(
            &self,
            id: RegionId,
        ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Region>, NzWalksError>> + Send {
            let result: Vec<Region> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: RegionId,
            changes: RegionChanges,
        ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.get_mut(&id).map(|region| {
                region.code = changes.code;
                region.name = changes.name;
                region.image_url = changes.image_url;
                region.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: RegionId,
        ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send {
            let result = self.store.lock().unwrap().remove(&id);
            async { Ok(result) }
        }
    }

    fn make_service() -> RegionService<InMemoryRegionRepo> {
        RegionService::new(InMemoryRegionRepo::default())
    }

    fn wellington() -> Region {
        Region::builder()
            .code("WLG")
            .name("Wellington")
            .build()
            .unwrap()
    }

    fn changes(code: &str, name: &str) -> RegionChanges {
        RegionChanges {
            code: code.to_string(),
            name: name.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = make_service();
        assert!(svc.list_regions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_get_created_region_back_unchanged() {
        let svc = make_service();
        let created = svc.create_region(wellington()).await.unwrap();

        let fetched = svc.get_region(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_when_code_is_invalid() {
        let svc = make_service();
        let mut region = wellington();
        region.code = "WELLY".to_string();

        let result = svc.create_region(region).await;
        assert!(matches!(
            result,
            Err(NzWalksError::Validation(ValidationError::WrongLength { .. }))
        ));
        assert!(svc.list_regions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_region_missing() {
        let svc = make_service();
        let result = svc.get_region(RegionId::generate()).await;
        assert!(matches!(result, Err(NzWalksError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_fields_when_updating_existing_region() {
        let svc = make_service();
        let created = svc.create_region(wellington()).await.unwrap();

        let updated = svc
            .update_region(created.id, changes("WGN", "Wellington City"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.code, "WGN");
        assert_eq!(svc.get_region(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn should_not_mutate_when_updating_missing_region() {
        let svc = make_service();
        let created = svc.create_region(wellington()).await.unwrap();

        let result = svc
            .update_region(RegionId::generate(), changes("AKL", "Auckland"))
            .await;

        assert!(matches!(result, Err(NzWalksError::NotFound(_))));
        assert_eq!(svc.list_regions().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn should_reject_update_with_invalid_changes() {
        let svc = make_service();
        let created = svc.create_region(wellington()).await.unwrap();

        let result = svc.update_region(created.id, changes("WLG", "")).await;

        assert!(matches!(result, Err(NzWalksError::Validation(_))));
        assert_eq!(svc.get_region(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_return_deleted_region_and_forget_it() {
        let svc = make_service();
        let created = svc.create_region(wellington()).await.unwrap();

        let deleted = svc.delete_region(created.id).await.unwrap();
        assert_eq!(deleted, created);

        let result = svc.get_region(created.id).await;
        assert!(matches!(result, Err(NzWalksError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_region() {
        let svc = make_service();
        let result = svc.delete_region(RegionId::generate()).await;
        assert!(matches!(result, Err(NzWalksError::NotFound(_))));
    }
}
