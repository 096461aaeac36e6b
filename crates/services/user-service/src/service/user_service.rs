//! User service - Handles user profile business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{UserFields, UserId, UserRecord, MAX_LIST_USERS};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and persist a new profile
    async fn create_user(&self, fields: UserFields) -> AppResult<UserRecord>;

    /// List profiles, capped at `MAX_LIST_USERS`
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Get a profile by the string form of its identifier
    async fn get_user(&self, raw_id: &str) -> AppResult<UserRecord>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, fields: UserFields) -> AppResult<UserRecord> {
        fields.validate()?;

        let record = self.repo.insert(fields).await?;
        tracing::info!(user_id = %record.id, "Created user");
        Ok(record)
    }

    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        let mut users = self.repo.list(MAX_LIST_USERS).await?;
        users.truncate(MAX_LIST_USERS as usize);
        Ok(users)
    }

    async fn get_user(&self, raw_id: &str) -> AppResult<UserRecord> {
        let id = UserId::parse(raw_id)?;
        tracing::debug!(user_id = %id, "Looking up user");

        self.repo.find_by_id(id).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn sample_fields() -> UserFields {
        UserFields {
            username: "ferris".to_string(),
            location: "Berlin".to_string(),
            skills: "rust".to_string(),
            interests: "crabs".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .with(eq(sample_fields()))
            .times(1)
            .returning(|fields| Ok(UserRecord::new(UserId::generate(), fields)));

        let service = UserManager::new(Arc::new(repo));
        let record = service.create_user(sample_fields()).await.unwrap();

        assert_eq!(record, UserRecord::new(record.id, sample_fields()));
        assert!(!record.id.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_field_before_persisting() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().times(0);

        let mut fields = sample_fields();
        fields.username = String::new();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(fields).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let id = UserId::generate();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|id| Ok(Some(UserRecord::new(id, sample_fields()))));

        let service = UserManager::new(Arc::new(repo));
        let record = service.get_user(&id.to_string()).await.unwrap();

        assert_eq!(record.id, id);
    }

    #[tokio::test]
    async fn test_get_user_malformed_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(0);

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user("not-an-id").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidIdentifier(_)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(&UserId::generate().to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_get_user_store_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::Database(DbErr::Custom("socket closed".to_string()))));

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .get_user(&UserId::generate().to_string())
            .await
            .unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_list_users_requests_capped_limit() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(MAX_LIST_USERS))
            .returning(|_| {
                Ok((0..3)
                    .map(|_| UserRecord::new(UserId::generate(), sample_fields()))
                    .collect())
            });

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 3);
    }

    #[tokio::test]
    async fn test_list_users_never_exceeds_cap() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|_| {
            Ok((0..MAX_LIST_USERS + 5)
                .map(|_| UserRecord::new(UserId::generate(), sample_fields()))
                .collect())
        });

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len() as u64, MAX_LIST_USERS);
    }
}
