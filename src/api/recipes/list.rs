use crate::api::{ApiError, AppState, ErrorEnvelope, RecipeListEnvelope};
use crate::models::Cuisine;
use axum::extract::{Query, State};
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Narrow to one cuisine. Absent or `All` returns everything.
    pub cuisine: Option<String>,
}

/// Resolve the query parameter to a store filter.
///
/// An unknown cuisine is a validation error rather than a silently
/// empty result, so a typo in a caller shows up immediately.
fn parse_filter(param: Option<&str>) -> Result<Option<Cuisine>, ApiError> {
    match param {
        None | Some("All") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|()| ApiError::Validation(format!("`{s}` is not a valid cuisine"))),
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes, newest first", body = RecipeListEnvelope),
        (status = 400, description = "Unknown cuisine filter", body = ErrorEnvelope)
    )
)]
pub async fn list_recipes(
    State(store): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = parse_filter(params.cuisine.as_deref())?;
    let recipes = store.find_all(filter);

    Ok(Json(RecipeListEnvelope {
        success: true,
        count: recipes.len(),
        data: recipes,
    }))
}
