pub mod models;
pub mod routes;
pub mod service;

use async_trait::async_trait;
use axum::Router;
use bookshelf_db::Db;
use bookshelf_kernel::{InitCtx, Module};
use serde_json::json;

use service::BookService;

/// Books module: CRUD over book records, mounted at `/api/books`
pub struct BooksModule {
    service: BookService,
}

impl BooksModule {
    pub fn new(db: Db) -> Self {
        Self {
            service: BookService::new(db),
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            namespace = %ctx.settings.database.namespace,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": json_response("List of books", json!({
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Book" }
                            })),
                            "500": message_response("Store failure")
                        }
                    }
                },
                "/add": {
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": request_body("BookFields"),
                        "responses": {
                            "201": book_response("Created book"),
                            "500": message_response("Store failure")
                        }
                    }
                },
                "/{id}": {
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "get": {
                        "summary": "Get a book by id",
                        "tags": ["Books"],
                        "responses": {
                            "200": book_response("Book"),
                            "404": message_response("Book not found"),
                            "500": message_response("Store failure")
                        }
                    },
                    "put": {
                        "summary": "Update a book by id",
                        "tags": ["Books"],
                        "requestBody": request_body("BookUpdate"),
                        "responses": {
                            "201": book_response("Updated book"),
                            "404": message_response("Book not found"),
                            "500": message_response("Store failure")
                        }
                    },
                    "delete": {
                        "summary": "Delete a book by id",
                        "tags": ["Books"],
                        "responses": {
                            "200": message_response("Deletion confirmation"),
                            "404": message_response("Book not found"),
                            "500": message_response("Store failure")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "description": "Store-assigned identifier"
                            },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "publishedDate": {
                                "type": "string",
                                "description": "Publication date as supplied"
                            },
                            "genre": { "type": "string" }
                        },
                        "required": ["id"]
                    },
                    "BookFields": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "publishedDate": { "type": "string" },
                            "genre": { "type": "string" }
                        }
                    },
                    "BookUpdate": {
                        "type": "object",
                        "description": "Absent fields are kept; null clears a field",
                        "properties": {
                            "title": { "type": ["string", "null"] },
                            "author": { "type": ["string", "null"] },
                            "publishedDate": { "type": ["string", "null"] },
                            "genre": { "type": ["string", "null"] }
                        }
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

fn json_response(description: &str, schema: serde_json::Value) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": schema }
        }
    })
}

fn book_response(description: &str) -> serde_json::Value {
    json_response(description, json!({ "$ref": "#/components/schemas/Book" }))
}

fn message_response(description: &str) -> serde_json::Value {
    json_response(
        description,
        json!({ "$ref": "#/components/schemas/MessageResponse" }),
    )
}

fn request_body(schema: &str) -> serde_json::Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{schema}") }
            }
        }
    })
}

/// Create a new instance of the books module
pub fn create_module(db: Db) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(db))
}
