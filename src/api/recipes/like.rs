use crate::api::{ApiError, AppState, ErrorEnvelope, RecipeEnvelope};
use axum::extract::{Path, State};
use axum::{response::IntoResponse, Json};
use uuid::Uuid;

#[utoipa::path(
    patch,
    path = "/api/recipes/{id}/like",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe liked successfully", body = RecipeEnvelope),
        (status = 404, description = "Recipe not found", body = ErrorEnvelope)
    )
)]
pub async fn like_recipe(
    State(store): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = store.increment_likes(id)?;

    tracing::debug!(%id, likes = recipe.likes, "recipe liked");

    Ok(Json(RecipeEnvelope {
        success: true,
        data: recipe,
        message: Some("Recipe liked successfully".to_string()),
    }))
}
