use actix_web::{web, App};
use std::sync::Arc;
use employee_records::{
    config::AuthConfig,
    db::postgres_service::PostgresService,
    types::user::RUserCredentials,
    utils::{password::hash_password, token},
};

use super::{test_auth_config, test_data};

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub auth: AuthConfig,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            auth: test_auth_config(),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.auth.clone()))
            .configure(employee_records::routes::configure_routes)
    }

    /// Seed a user straight through the store and hand back credentials
    /// plus a freshly issued bearer token, skipping the HTTP round trips.
    #[allow(dead_code)]
    pub async fn create_test_user(&self) -> (RUserCredentials, String) {
        let creds = test_data::sample_credentials();
        let hashed = hash_password(&creds.password, &self.auth.hash)
            .expect("Failed to hash password");
        self.db
            .create_user(&creds.username, &hashed)
            .await
            .expect("Failed to create user");

        let access_token = token::issue(
            &creds.username,
            self.auth.token_ttl_secs,
            &self.auth.token_secret,
        )
        .expect("Failed to issue token");

        (creds, access_token)
    }
}
