//! Bookshelf application library
//!
//! Wires the project modules onto the kernel registry and runs the HTTP server.

pub mod modules;

use anyhow::Context;
use axum::Router;
use bookshelf_db::Db;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Re-export commonly used types
pub use modules::*;

/// Registry holding every project module, bound to `db`.
pub fn module_registry(db: &Db) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, db);
    registry
}

/// Full application router for `db`, without running module lifecycle hooks.
pub fn app(db: &Db, settings: &Settings) -> Router {
    bookshelf_http::build_router(&module_registry(db), settings)
}

/// Connect to the store, bring modules up, and serve until shutdown.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.endpoint,
        "bookshelf bootstrap starting"
    );

    let db = bookshelf_db::connect(&settings.database)
        .await
        .with_context(|| "failed to open document store")?;

    let registry = module_registry(&db);
    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!("bookshelf bootstrap complete");

    let served = bookshelf_http::start_server(&registry, &settings).await;
    registry.stop_modules().await?;
    served
}
