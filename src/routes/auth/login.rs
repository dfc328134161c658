use actix_web::{post, web};
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RUserCredentials};
use crate::utils::password::verify_password;
use crate::utils::token;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth_cfg: web::Data<AuthConfig>,
    body: web::Json<RUserCredentials>,
) -> ApiResult<LoginRes> {
    let body = body.into_inner();

    // Unknown username and wrong password take the same exit so callers
    // cannot enumerate accounts.
    let user = match db.get_user_by_username(&body.username).await? {
        Some(user) => user,
        None => return Err(AppError::Unauthorized),
    };

    let password_ok = verify_password(&body.password, &user.hashed_password).unwrap_or(false);
    if !password_ok {
        return Err(AppError::Unauthorized);
    }

    let access_token = token::issue(
        &user.username,
        auth_cfg.token_ttl_secs,
        &auth_cfg.token_secret,
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(ApiResponse::Ok(LoginRes {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
