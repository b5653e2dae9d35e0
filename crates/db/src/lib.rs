//! SurrealDB client factory.
//!
//! The returned [`Db`] handle is cheap to clone and safe to share between
//! concurrent requests; every clone talks to the same connection.

use anyhow::{bail, Context};
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;

use bookshelf_kernel::settings::DatabaseSettings;

/// Shared handle to the document store.
pub type Db = Surreal<Any>;

/// Open a connection to the store described by `settings` and select its
/// namespace and database.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<Db> {
    tracing::info!(
        target: "bookshelf-db",
        endpoint = %settings.endpoint,
        namespace = %settings.namespace,
        database = %settings.database,
        "connecting to document store"
    );

    let db = any::connect(settings.endpoint.as_str())
        .await
        .with_context(|| format!("failed to connect to '{}'", settings.endpoint))?;

    match (&settings.username, &settings.password) {
        (Some(username), Some(password)) => {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .with_context(|| format!("failed to sign in as '{}'", username))?;
        }
        (Some(username), None) => {
            bail!("database username '{}' configured without a password", username);
        }
        (None, _) => {}
    }

    db.use_ns(settings.namespace.as_str())
        .use_db(settings.database.as_str())
        .await
        .with_context(|| {
            format!(
                "failed to select namespace '{}' and database '{}'",
                settings.namespace, settings.database
            )
        })?;

    tracing::info!(target: "bookshelf-db", "document store connected");
    Ok(db)
}
