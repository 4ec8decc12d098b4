use crate::api::{ApiError, AppState, ErrorEnvelope, RecipeEnvelope};
use axum::extract::{Path, State};
use axum::{response::IntoResponse, Json};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeEnvelope),
        (status = 404, description = "Recipe not found", body = ErrorEnvelope)
    )
)]
pub async fn get_recipe(
    State(store): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = store.find_by_id(id)?;

    Ok(Json(RecipeEnvelope {
        success: true,
        data: recipe,
        message: None,
    }))
}
