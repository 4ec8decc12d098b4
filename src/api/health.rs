use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Static status payload served at the root path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Endpoints {
    pub recipes: String,
    pub create_recipe: String,
    pub get_recipe: String,
    pub update_recipe: String,
    pub delete_recipe: String,
    pub like_recipe: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "API is up", body = StatusResponse)
    )
)]
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Recipedia API is running".to_string(),
        status: "Active".to_string(),
        endpoints: Endpoints {
            recipes: "/api/recipes".to_string(),
            create_recipe: "POST /api/recipes".to_string(),
            get_recipe: "GET /api/recipes/{id}".to_string(),
            update_recipe: "PUT /api/recipes/{id}".to_string(),
            delete_recipe: "DELETE /api/recipes/{id}".to_string(),
            like_recipe: "PATCH /api/recipes/{id}/like".to_string(),
        },
    })
}

#[derive(OpenApi)]
#[openapi(paths(root), components(schemas(StatusResponse, Endpoints)))]
pub struct ApiDoc;
