use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use payment::api::app::create_app;
use payment::domain::repository::ReceiptRepository;
use payment::domain::service::NotificationService;
use payment::infra;
use payment::infra::config::Config;
use payment::infra::repository::PgReceiptRepository;
use payment::infra::service::{HttpNotificationService, LogNotificationService};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let pool = infra::db::pg(&config).await?;
    infra::db::migrate(&pool).await?;

    let receipt_repo: Arc<dyn ReceiptRepository> = Arc::new(PgReceiptRepository::new(pool));
    let notifications: Arc<dyn NotificationService> = match &config.notification_url {
        Some(url) => Arc::new(HttpNotificationService::new(url, config.notification_timeout)?),
        None => {
            log::warn!("NOTIFICATION_SERVICE_URL is not set, resident notifications will only be logged");
            Arc::new(LogNotificationService)
        }
    };

    log::info!(host = config.http_host.as_str(), port = config.http_port; "Start server");

    let cors_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default().allowed_origin(origin),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600);

        App::new()
            .configure(create_app(
                Arc::clone(&receipt_repo),
                Arc::clone(&notifications),
            ))
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind((config.http_host.as_str(), config.http_port))?
    .run()
    .await?;

    Ok(())
}
