use crate::api::{ApiError, AppState, DeletedEnvelope, EmptyData, ErrorEnvelope};
use axum::extract::{Path, State};
use axum::{response::IntoResponse, Json};
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted successfully", body = DeletedEnvelope),
        (status = 404, description = "Recipe not found", body = ErrorEnvelope)
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    store.delete(id)?;

    tracing::info!(%id, "recipe deleted");

    Ok(Json(DeletedEnvelope {
        success: true,
        data: EmptyData {},
        message: "Recipe deleted successfully".to_string(),
    }))
}
