use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};

impl PostgresService {
    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.database_connection)
            .await?)
    }

    /// Registration: insert a new credential record. The pre-insert lookup
    /// catches the common duplicate; a concurrent registration that slips
    /// past it trips the unique index and is reported the same way.
    pub async fn create_user(
        &self,
        username: &str,
        hashed_password: &str,
    ) -> Result<UserModel, AppError> {
        if self.get_user_by_username(username).await?.is_some() {
            return Err(AppError::AlreadyExists);
        }

        let result = User::insert(UserActive {
            username: Set(username.to_string()),
            hashed_password: Set(hashed_password.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(&self.database_connection)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }
}
