use actix_web::{dev::ServiceRequest, web};
use actix_web_httpauth::extractors::{
    bearer::{self, BearerAuth},
    AuthenticationError,
};
use entity::user::Model as UserModel;
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;

/// Resolve the user behind a bearer token: validate signature and expiry,
/// then look the subject up. A user deleted after issuance is rejected the
/// same way as a bad token.
pub async fn resolve_user(
    db: &PostgresService,
    auth: &AuthConfig,
    token_str: &str,
) -> Result<UserModel, AppError> {
    let claims = token::validate(token_str, &auth.token_secret).map_err(|e| {
        log::debug!("rejected bearer token: {}", e);
        AppError::Unauthorized
    })?;

    match db.get_user_by_username(&claims.sub).await? {
        Some(user) => Ok(user),
        None => Err(AppError::Unauthorized),
    }
}

/// Bearer middleware validator for protected scopes. Every token failure
/// mode becomes the same 401 with a `WWW-Authenticate: Bearer` challenge.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let db = req.app_data::<web::Data<Arc<PostgresService>>>().cloned();
    let auth = req.app_data::<web::Data<AuthConfig>>().cloned();
    let (Some(db), Some(auth)) = (db, auth) else {
        return Err((
            AppError::Internal("auth state not configured".to_string()).into(),
            req,
        ));
    };

    match resolve_user(&db, &auth, credentials.token()).await {
        Ok(_) => Ok(req),
        Err(AppError::Unauthorized) => {
            Err((AuthenticationError::from(bearer::Config::default()).into(), req))
        }
        // Store failures are not auth failures; let them surface as 500s.
        Err(e) => Err((e.into(), req)),
    }
}
