use crate::api::{ApiError, AppState, ErrorEnvelope, RecipeEnvelope};
use crate::models::RecipeDraft;
use axum::extract::{Path, State};
use axum::{response::IntoResponse, Json};
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeEnvelope),
        (status = 400, description = "Validation failed", body = ErrorEnvelope),
        (status = 404, description = "Recipe not found", body = ErrorEnvelope)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<RecipeDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = store.replace(id, &draft)?;

    tracing::info!(id = %recipe.id, "recipe updated");

    Ok(Json(RecipeEnvelope {
        success: true,
        data: recipe,
        message: Some("Recipe updated successfully".to_string()),
    }))
}
