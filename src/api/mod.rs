pub mod health;
pub mod recipes;

use crate::models::Recipe;
use crate::store::{RecipeStore, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across all handlers.
pub type AppState = Arc<RecipeStore>;

/// Envelope wrapping a single recipe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeEnvelope {
    pub success: bool,
    pub data: Recipe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope wrapping the recipe collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeListEnvelope {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Recipe>,
}

/// Empty `data` payload for delete responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Envelope confirming a deletion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedEnvelope {
    pub success: bool,
    pub data: EmptyData,
    pub message: String,
}

/// Error envelope shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

/// Failure classes a handler can produce.
///
/// Expected failures (validation, unknown id) surface their message
/// verbatim; internal faults are logged and surfaced as a generic
/// message only.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound,
    RouteNotFound,
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => ApiError::Validation(errors.to_string()),
            StoreError::NotFound => ApiError::NotFound,
            err => {
                tracing::error!(error = %err, "store operation failed");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Recipe not found".to_string()),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Route not found".to_string()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_string(),
            ),
        };

        (
            status,
            Json(ErrorEnvelope {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Build the full application router.
pub fn app(store: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .nest("/api/recipes", recipes::router())
        .fallback(route_not_found)
        .with_state(store)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Generate the complete OpenAPI spec by merging all module specs.
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(
        RecipeEnvelope,
        RecipeListEnvelope,
        DeletedEnvelope,
        ErrorEnvelope,
        EmptyData,
    )))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![health::ApiDoc::openapi(), recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
