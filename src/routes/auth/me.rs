use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserPublic;
use crate::utils::webutils::resolve_user;

#[get("")]
async fn me(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth_cfg: web::Data<AuthConfig>,
    auth: BearerAuth,
) -> ApiResult<UserPublic> {
    let user = resolve_user(&db, &auth_cfg, auth.token()).await?;
    Ok(ApiResponse::Ok(user.into()))
}
