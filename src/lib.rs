//! Recipedia: a recipe-sharing application.
//!
//! Three layers, matching how the data flows:
//!
//! - [`store`] — the recipe document store with schema validation.
//! - [`api`] — stateless axum handlers wrapping every outcome in a
//!   uniform `{success, data, message, count}` envelope.
//! - [`client`] — the client-side data layer: an HTTP wrapper plus a
//!   session state container mirroring the remote collection.

pub mod api;
pub mod client;
pub mod config;
pub mod models;
pub mod store;
pub mod telemetry;

pub use models::{Cuisine, Difficulty, Recipe, RecipeDraft};
pub use store::{RecipeStore, StoreError};
