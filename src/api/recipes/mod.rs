pub mod create;
pub mod delete;
pub mod get;
pub mod like;
pub mod list;
pub mod update;

use crate::api::AppState;
use axum::routing::{get, patch};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/{id}/like", patch(like::like_recipe))
}

#[derive(OpenApi)]
#[openapi(paths(
    create::create_recipe,
    list::list_recipes,
    get::get_recipe,
    update::update_recipe,
    delete::delete_recipe,
    like::like_recipe,
))]
pub struct ApiDoc;
