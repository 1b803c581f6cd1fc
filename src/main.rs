pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::multimedia;

use crate::config::AppConfig;
use crate::multimedia::adapter::outgoing::db::{
    MediaQueryPostgres, ParentRepositoryPostgres, PositionStorePostgres,
};
use crate::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::multimedia::application::ports::incoming::services::{
    AttachMediaService, ListAttachedMediaService, ListUnlinkedMediaService, NextPositionService,
    ReorderMediaService, SetCoverImageService, UnlinkMediaService, UpdatePositionsService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub multimedia: MultimediaUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.acquire_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Media attachments
    let position_store = PositionStorePostgres::new(Arc::clone(&db_arc));
    let media_query = MediaQueryPostgres::new(Arc::clone(&db_arc));
    let parent_repo = ParentRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        multimedia: MultimediaUseCases {
            attach: Arc::new(AttachMediaService::new(position_store.clone())),
            unlink: Arc::new(UnlinkMediaService::new(position_store.clone())),
            reorder: Arc::new(ReorderMediaService::new(position_store.clone())),
            update_positions: Arc::new(UpdatePositionsService::new(position_store.clone())),
            next_position: Arc::new(NextPositionService::new(position_store)),
            list_attached: Arc::new(ListAttachedMediaService::new(media_query.clone())),
            list_unlinked: Arc::new(ListUnlinkedMediaService::new(media_query)),
            set_cover: Arc::new(SetCoverImageService::new(parent_repo)),
        },
    };

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::multimedia::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // OpenAPI
    cfg.service(crate::api::openapi::openapi_json);
    // Media (fixed segments before `{media_id}`)
    cfg.service(routes::list_unlinked_media_handler);
    cfg.service(routes::next_position_handler);
    cfg.service(routes::update_positions_handler);
    cfg.service(routes::list_media_handler);
    cfg.service(routes::attach_media_handler);
    cfg.service(routes::reorder_media_handler);
    cfg.service(routes::unlink_media_handler);
    // Cover
    cfg.service(routes::set_cover_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
