//! SeaORM-backed user repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder,
    Set, Statement,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::{RepositoryKind, UserRepository};
use common::{AppError, AppResult, OptionExt};
use domain::{User, UserKey};

/// Resolve a key to the table's primary key type.
///
/// Ids outside the column range cannot exist, so they read as missing.
fn row_id(key: &UserKey) -> AppResult<i32> {
    let id = key.resolve()?;
    i32::try_from(id).map_err(|_| AppError::NotFound)
}

/// Concrete implementation of UserRepository over a relational store.
///
/// Id assignment and concurrency control are left to the database.
pub struct OrmUserStore {
    db: DatabaseConnection,
}

impl OrmUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for OrmUserStore {
    fn kind(&self) -> RepositoryKind {
        RepositoryKind::Orm
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    async fn create(&self, full_name: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            full_name: Set(full_name),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn get(&self, id: UserKey) -> AppResult<User> {
        let model = UserEntity::find_by_id(row_id(&id)?)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        Ok(User::from(model))
    }

    async fn update(&self, id: UserKey, full_name: String) -> AppResult<User> {
        let model = UserEntity::find_by_id(row_id(&id)?)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = model.into();
        active.full_name = Set(full_name);

        // The row can vanish between the lookup and the write
        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::from(other),
        })?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: UserKey) -> AppResult<()> {
        let result = UserEntity::delete_by_id(row_id(&id)?)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
