use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::types::token::{Claims, TokenError};

/// Issue a signed bearer token for `subject`, expiring `ttl_secs` from now.
/// HS256 over the configured secret; the result is the usual three-part
/// base64url string.
pub fn issue(
    subject: &str,
    ttl_secs: i64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp: now + ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Check structure, signature and expiry, returning the claims on success.
pub fn validate(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    // No clock leeway: a token is rejected the moment `exp` passes.
    validation.leeway = 0;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
