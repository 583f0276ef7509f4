use std::time::Duration;

use sea_orm::Database;
use sea_orm_migration::MigratorTrait as _;
use tracing::info;

use spindle_catalog::config::CatalogConfig;
use spindle_catalog::infra::s3::S3ObjectStore;
use spindle_catalog::router::build_router;
use spindle_catalog::state::AppState;
use spindle_catalog_migration::Migrator;
use spindle_core::config::Config as _;

#[tokio::main]
async fn main() {
    spindle_core::tracing::init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Create-if-absent: bring the schema up on every start.
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let store = S3ObjectStore::connect(config.s3_bucket_name.clone(), config.public_base_url()).await;

    let state = AppState {
        db,
        store,
        upload_timeout: Duration::from_secs(config.upload_timeout_secs),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
