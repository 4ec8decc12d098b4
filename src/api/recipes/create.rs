use crate::api::{ApiError, AppState, ErrorEnvelope, RecipeEnvelope};
use crate::models::RecipeDraft;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeEnvelope),
        (status = 400, description = "Validation failed", body = ErrorEnvelope)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = store.insert(&draft)?;

    tracing::info!(id = %recipe.id, title = %recipe.title, "recipe created");

    Ok((
        StatusCode::CREATED,
        Json(RecipeEnvelope {
            success: true,
            data: recipe,
            message: Some("Recipe created successfully".to_string()),
        }),
    ))
}
