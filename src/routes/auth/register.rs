use actix_web::{post, web};
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCredentials, UserPublic};
use crate::utils::password::hash_password;

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth_cfg: web::Data<AuthConfig>,
    body: web::Json<RUserCredentials>,
) -> ApiResult<UserPublic> {
    let body = body.into_inner();

    if body.username.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(
            "username and password must be non-empty".to_string(),
        ));
    }

    let hashed = hash_password(&body.password, &auth_cfg.hash)?;
    let user = db.create_user(&body.username, &hashed).await?;

    Ok(ApiResponse::Created(user.into()))
}
