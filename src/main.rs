use actix_web::{web, App, HttpServer};
use employee_records::config::EnvConfig;
use employee_records::db::postgres_service::PostgresService;
use employee_records::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(
            &config.db_url,
        )
            .await
            .expect("Failed to initialize PostgresService")
    );

    let auth_config = config.auth.clone();

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(auth_config.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
