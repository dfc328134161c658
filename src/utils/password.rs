use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::config::HashConfig;
use crate::types::error::AppError;

/// Hash a plaintext password into a PHC string with a fresh random salt.
/// Cost parameters come from configuration, never from the caller.
pub fn hash_password(plain: &str, cfg: &HashConfig) -> Result<String, AppError> {
    let params = Params::new(cfg.memory_kib, cfg.iterations, Params::DEFAULT_P_COST, None)
        .map_err(|e| AppError::Internal(format!("Invalid Argon2 parameters: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC string. Cost parameters
/// are read back out of the hash itself, and the comparison is the
/// algorithm's own constant-time verify.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}
