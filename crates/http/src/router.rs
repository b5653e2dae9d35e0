//! Router builder for the bookshelf HTTP server

use axum::{error_handling::HandleErrorLayer, routing::get, Router};
use std::time::Duration;
use tower::{timeout::TimeoutLayer, BoxError, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use bookshelf_kernel::ModuleRegistry;

use crate::{error::AppError, MakeRequestUuidV7};

const API_TITLE: &str = "Bookshelf API";
const API_VERSION: &str = "1.0.0";

/// Builder for constructing the main HTTP router
///
/// Layers only wrap routes added before them, so mount routes first.
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    /// Create a new router builder
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Add a route to the router
    pub fn route(mut self, path: &str, route: axum::routing::MethodRouter) -> Self {
        self.router = self.router.route(path, route);
        self
    }

    /// Mount a module's router under `/api/{module_name}`
    pub fn mount_module(mut self, module_name: &str, module_router: Router) -> Self {
        let api_path = format!("/api/{}", module_name);
        self.router = self.router.nest(&api_path, module_router);
        self
    }

    /// Add tracing middleware
    pub fn with_tracing(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );
        self
    }

    /// Add CORS middleware
    pub fn with_cors(mut self) -> Self {
        self.router = self.router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
        self
    }

    /// Add request ID middleware; the id is echoed back on the response
    pub fn with_request_id(mut self) -> Self {
        self.router = self
            .router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));
        self
    }

    /// Add timeout middleware; an elapsed request is answered as an internal error
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.router = self.router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(middleware_error))
                .layer(TimeoutLayer::new(Duration::from_millis(timeout_ms))),
        );
        self
    }

    /// Add OpenAPI documentation by collecting specs from all modules
    pub fn with_openapi(mut self, registry: &ModuleRegistry) -> Self {
        let openapi_spec = merge_openapi(registry);

        // Deserialize our JSON spec into a proper utoipa OpenApi object
        // so SwaggerUI can serve it
        let openapi_obj: utoipa::openapi::OpenApi =
            match serde_json::from_value(openapi_spec.clone()) {
                Ok(spec) => spec,
                Err(e) => {
                    tracing::warn!(error = %e, "merged OpenAPI spec rejected; serving a bare one");
                    utoipa::openapi::OpenApiBuilder::new()
                        .info(
                            utoipa::openapi::InfoBuilder::new()
                                .title(API_TITLE)
                                .version(API_VERSION)
                                .build(),
                        )
                        .build()
                }
            };

        self.router = self.router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi_obj),
        );

        // Also serve the raw JSON spec at /docs/openapi.json for external consumers
        self.router = self.router.route(
            "/docs/openapi.json",
            get(move || async move { axum::Json(openapi_spec.clone()) }),
        );

        self
    }

    /// Build the final router
    pub fn build(self) -> Router {
        self.router
    }
}

async fn middleware_error(error: BoxError) -> AppError {
    AppError::Internal(anyhow::anyhow!(error.to_string()))
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the base document with every module's paths and schemas.
///
/// Module paths are prefixed with `/api/{module_name}`; a module path of `/`
/// maps onto the bare prefix.
pub fn merge_openapi(registry: &ModuleRegistry) -> serde_json::Value {
    let mut openapi_spec = serde_json::json!({
        "openapi": "3.1.0",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": "Book catalogue API"
        },
        "paths": {},
        "components": {
            "schemas": {}
        }
    });

    openapi_spec["components"]["schemas"]["MessageResponse"] = serde_json::json!({
        "type": "object",
        "properties": {
            "message": {
                "type": "string"
            }
        },
        "required": ["message"]
    });

    openapi_spec["paths"]["/healthz"] = serde_json::json!({
        "get": {
            "summary": "Health check",
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "text/plain": {
                            "schema": {
                                "type": "string"
                            }
                        }
                    }
                }
            }
        }
    });

    for module in registry.modules() {
        let Some(module_spec) = module.openapi() else {
            continue;
        };

        if let Some(paths) = module_spec.get("paths").and_then(|p| p.as_object()) {
            for (path, path_item) in paths {
                let prefixed_path = match path.as_str() {
                    "/" => format!("/api/{}", module.name()),
                    _ => format!("/api/{}{}", module.name(), path),
                };
                openapi_spec["paths"][prefixed_path] = path_item.clone();
            }
        }

        if let Some(schemas) = module_spec
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(|s| s.as_object())
        {
            for (schema_name, schema_def) in schemas {
                openapi_spec["components"]["schemas"][schema_name] = schema_def.clone();
            }
        }
    }

    openapi_spec
}
