//! Walk service: use-cases for managing walks.

use nzwalks_domain::error::{NotFoundError, NzWalksError};
use nzwalks_domain::id::WalkId;
use nzwalks_domain::walk::{Walk, WalkChanges};

use crate::ports::WalkRepository;

/// Application service for walk CRUD operations.
///
/// Only field-level invariants are checked here; whether the referenced
/// region and difficulty exist is decided by the repository.
pub struct WalkService<R> {
    repo: R,
}

fn not_found(id: WalkId) -> NzWalksError {
    NotFoundError {
        entity: "Walk",
        id: id.to_string(),
    }
    .into()
}

impl<R: WalkRepository> WalkService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all walks.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_walks(&self) -> Result<Vec<Walk>, NzWalksError> {
        self.repo.get_all().await
    }

    /// Look up a walk by id.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::NotFound`] when no walk with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_walk(&self, id: WalkId) -> Result<Walk, NzWalksError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Create a new walk after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] if invariants fail or a reference
    /// is unknown to the store, or a storage error from the repository.
    #[tracing::instrument(skip(self, walk), fields(walk_name = %walk.name))]
    pub async fn create_walk(&self, walk: Walk) -> Result<Walk, NzWalksError> {
        walk.validate()?;
        let created = self.repo.create(walk).await?;
        tracing::info!(walk_id = %created.id, region_id = %created.region_id, "walk created");
        Ok(created)
    }

    /// Replace the mutable fields of an existing walk.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] if `changes` are invalid,
    /// [`NzWalksError::NotFound`] if no walk with `id` exists, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_walk(
        &self,
        id: WalkId,
        changes: WalkChanges,
    ) -> Result<Walk, NzWalksError> {
        changes.validate()?;
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(walk_id = %id, "walk updated");
        Ok(updated)
    }

    /// Delete a walk by id and return what was removed.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::NotFound`] if no walk with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_walk(&self, id: WalkId) -> Result<Walk, NzWalksError> {
        let deleted = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(walk_id = %id, "walk deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nzwalks_domain::id::{DifficultyId, RegionId};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryWalkRepo {
        store: Mutex<HashMap<WalkId, Walk>>,
    }

    impl WalkRepository for InMemoryWalkRepo {
        fn create(&self, walk: Walk) -> impl Future<Output = Result<Walk, NzWalksError>> + Send {
            self.store.lock().unwrap().insert(walk.id, walk.clone());
            async { Ok(walk) }
        }

        fn get_by_id(
            &self,
            id: WalkId,
        ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Walk>, NzWalksError>> + Send {
            let result: Vec<Walk> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: WalkId,
            changes: WalkChanges,
        ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.get_mut(&id).map(|walk| {
                walk.name = changes.name;
                walk.description = changes.description;
                walk.length_in_km = changes.length_in_km;
                walk.image_url = changes.image_url;
                walk.difficulty_id = changes.difficulty_id;
                walk.region_id = changes.region_id;
                walk.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: WalkId,
        ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send {
            let result = self.store.lock().unwrap().remove(&id);
            async { Ok(result) }
        }
    }

    fn make_service() -> WalkService<InMemoryWalkRepo> {
        WalkService::new(InMemoryWalkRepo::default())
    }

    fn valid_walk() -> Walk {
        Walk::builder()
            .name("Tongariro Alpine Crossing")
            .description("Volcanic terrain")
            .length_in_km(19.4)
            .difficulty_id(DifficultyId::generate())
            .region_id(RegionId::generate())
            .build()
            .unwrap()
    }

    fn changes_for(walk: &Walk) -> WalkChanges {
        WalkChanges {
            name: "Tongariro Northern Circuit".to_string(),
            description: walk.description.clone(),
            length_in_km: 43.0,
            image_url: Some("https://img/tnc.jpg".to_string()),
            difficulty_id: walk.difficulty_id,
            region_id: walk.region_id,
        }
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = make_service();
        assert!(svc.list_walks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_get_created_walk_back_unchanged() {
        let svc = make_service();
        let created = svc.create_walk(valid_walk()).await.unwrap();

        assert_eq!(svc.get_walk(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_reject_create_when_length_out_of_range() {
        let svc = make_service();
        let mut walk = valid_walk();
        walk.length_in_km = -1.0;

        assert!(matches!(
            svc.create_walk(walk).await,
            Err(NzWalksError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn should_replace_fields_when_updating_existing_walk() {
        let svc = make_service();
        let created = svc.create_walk(valid_walk()).await.unwrap();

        let updated = svc
            .update_walk(created.id, changes_for(&created))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Tongariro Northern Circuit");
        assert_eq!(updated.image_url.as_deref(), Some("https://img/tnc.jpg"));
    }

    #[tokio::test]
    async fn should_not_mutate_when_updating_missing_walk() {
        let svc = make_service();
        let created = svc.create_walk(valid_walk()).await.unwrap();

        let result = svc
            .update_walk(WalkId::generate(), changes_for(&created))
            .await;

        assert!(matches!(result, Err(NzWalksError::NotFound(_))));
        assert_eq!(svc.get_walk(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_return_not_found_after_delete() {
        let svc = make_service();
        let created = svc.create_walk(valid_walk()).await.unwrap();

        let deleted = svc.delete_walk(created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(matches!(
            svc.get_walk(created.id).await,
            Err(NzWalksError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_walk(created.id).await,
            Err(NzWalksError::NotFound(_))
        ));
    }
}
