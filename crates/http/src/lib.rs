//! HTTP server facade for bookshelf with Axum, error handling, and OpenAPI support.

use anyhow::Context;
use axum::{extract::Request, http::HeaderValue, routing::get, Router};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::{Timestamp, Uuid};

use bookshelf_kernel::{settings::Settings, ModuleRegistry};

pub mod error;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry
///
/// Returns once the server has drained after a shutdown signal.
pub async fn start_server(registry: &ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    tracing::info!(
        "starting HTTP server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let app = build_router(registry, settings);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}",
        listener
            .local_addr()
            .context("failed to read listener address")?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the main HTTP router with all module routes mounted
pub fn build_router(registry: &ModuleRegistry, settings: &Settings) -> Router {
    let mut router_builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        let module_name = module.name();
        tracing::info!(
            module = module_name,
            "mounting module routes under /api/{}",
            module_name
        );
        router_builder = router_builder.mount_module(module_name, module.routes());
    }

    router_builder
        .with_openapi(registry)
        .with_timeout(settings.server.request_timeout_ms)
        .with_cors()
        .with_tracing()
        .with_request_id()
        .build()
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

/// Request ID generator producing time-ordered UUIDs
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let timestamp = Timestamp::now(uuid::NoContext);
        let request_id = Uuid::new_v7(timestamp)
            .to_string()
            .parse::<HeaderValue>()
            .ok()?;
        Some(RequestId::new(request_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthz_is_served_without_modules() {
        let registry = ModuleRegistry::new();
        let app = build_router(&registry, &Settings::default());

        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_through_to_404() {
        let registry = ModuleRegistry::new();
        let app = build_router(&registry, &Settings::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
