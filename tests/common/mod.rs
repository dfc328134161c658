use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use employee_records::config::{AuthConfig, HashConfig};
use employee_records::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        token_secret: "test-secret".to_string(),
        token_ttl_secs: 1800,
        // Minimal cost so hashing doesn't dominate test runtime.
        hash: HashConfig {
            memory_kib: 1024,
            iterations: 1,
        },
    }
}

// Test data helpers
pub mod test_data {
    use employee_records::types::employee::REmployee;
    use employee_records::types::user::RUserCredentials;
    use uuid::Uuid;

    #[allow(dead_code)]
    pub fn sample_credentials() -> RUserCredentials {
        RUserCredentials {
            username: format!("user-{}", Uuid::new_v4()),
            password: "secret1".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_employee() -> REmployee {
        REmployee {
            name: "Ada Lovelace".to_string(),
            age: 36,
            department: "Engineering".to_string(),
            position: "Analyst".to_string(),
        }
    }
}
