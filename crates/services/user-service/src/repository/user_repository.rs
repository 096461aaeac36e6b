//! User profile repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QuerySelect, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{UserFields, UserId, UserRecord};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Identifiers are assigned here, never taken from the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new profile under a freshly generated identifier
    async fn insert(&self, fields: UserFields) -> AppResult<UserRecord>;

    /// Find a profile by identifier
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>>;

    /// List at most `limit` profiles in store order
    async fn list(&self, limit: u64) -> AppResult<Vec<UserRecord>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, fields: UserFields) -> AppResult<UserRecord> {
        let active_model = ActiveModel {
            id: Set(UserId::generate().as_uuid()),
            username: Set(fields.username),
            location: Set(fields.location),
            skills: Set(fields.skills),
            interests: Set(fields.interests),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(UserRecord::from(model))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        let result = UserEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserRecord::from))
    }

    async fn list(&self, limit: u64) -> AppResult<Vec<UserRecord>> {
        let models = UserEntity::find()
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserRecord::from).collect())
    }
}
