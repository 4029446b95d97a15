//! Difficulty service: read access to the seeded difficulty grades.

use nzwalks_domain::difficulty::Difficulty;
use nzwalks_domain::error::{NotFoundError, NzWalksError};
use nzwalks_domain::id::DifficultyId;

use crate::ports::DifficultyRepository;

/// Application service for difficulty lookups.
pub struct DifficultyService<R> {
    repo: R,
}

impl<R: DifficultyRepository> DifficultyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all difficulties.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_difficulties(&self) -> Result<Vec<Difficulty>, NzWalksError> {
        self.repo.get_all().await
    }

    /// Look up a difficulty by id.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::NotFound`] when no difficulty with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_difficulty(&self, id: DifficultyId) -> Result<Difficulty, NzWalksError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Difficulty",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    struct FixedDifficulties(Vec<Difficulty>);

    impl DifficultyRepository for FixedDifficulties {
        fn get_by_id(
            &self,
            id: DifficultyId,
        ) -> impl Future<Output = Result<Option<Difficulty>, NzWalksError>> + Send {
            let result = self.0.iter().find(|d| d.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Difficulty>, NzWalksError>> + Send {
            let result = self.0.clone();
            async { Ok(result) }
        }
    }

    fn easy() -> Difficulty {
        Difficulty {
            id: DifficultyId::generate(),
            name: "Easy".to_string(),
        }
    }

    #[tokio::test]
    async fn should_find_seeded_difficulty() {
        let easy = easy();
        let svc = DifficultyService::new(FixedDifficulties(vec![easy.clone()]));

        assert_eq!(svc.get_difficulty(easy.id).await.unwrap(), easy);
        assert_eq!(svc.list_difficulties().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_difficulty() {
        let svc = DifficultyService::new(FixedDifficulties(vec![easy()]));
        let result = svc.get_difficulty(DifficultyId::generate()).await;
        assert!(matches!(result, Err(NzWalksError::NotFound(_))));
    }
}
