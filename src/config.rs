use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// HMAC signing secret for bearer tokens. Required; never committed.
    pub token_secret: String,
    /// Lifetime of an issued token in seconds.
    pub token_ttl_secs: i64,
    pub hash: HashConfig,
}

/// Argon2 cost surface. Defaults follow the argon2 crate's recommended
/// parameters; tests dial them down so hashing stays fast.
#[derive(Clone, Debug)]
pub struct HashConfig {
    pub memory_kib: u32,
    pub iterations: u32,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");
        let token_secret: String = Self::get_env("TOKEN_SECRET");

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            db_url,
            auth: AuthConfig {
                token_secret,
                token_ttl_secs: env::var("TOKEN_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1800),
                hash: HashConfig {
                    memory_kib: env::var("ARGON2_MEMORY_KIB")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(19456),
                    iterations: env::var("ARGON2_ITERATIONS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(2),
                },
            },
        }
    }
}
