//! Client-side data layer: a thin HTTP wrapper over the recipe API plus
//! a session-scoped state container ([`session::RecipeSession`]) that
//! mirrors the remote collection.

pub mod form;
pub mod session;

pub use session::{Intent, IntentStatus, RecipeSession};

use crate::models::{Cuisine, Recipe, RecipeDraft};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a failure envelope; the message is the
    /// server's own, or a generic fallback when it sent none.
    #[error("{0}")]
    Api(String),

    /// The request never produced a usable response.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Envelope shape every endpoint responds with.
#[derive(Debug, Deserialize)]
struct WireEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

/// One method per recipe endpoint. The base URL comes from whatever
/// configuration the caller uses; this layer only appends paths.
#[derive(Debug, Clone)]
pub struct RecipeApi {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn recipes_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    fn recipe_url(&self, id: Uuid) -> String {
        format!("{}/api/recipes/{id}", self.base_url)
    }

    pub async fn list(&self, cuisine: Option<Cuisine>) -> Result<Vec<Recipe>, ClientError> {
        let mut request = self.http.get(self.recipes_url());
        if let Some(cuisine) = cuisine {
            request = request.query(&[("cuisine", cuisine.as_str())]);
        }
        decode(request.send().await?, "Error fetching recipes").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Recipe, ClientError> {
        let response = self.http.get(self.recipe_url(id)).send().await?;
        decode(response, "Error fetching recipe").await
    }

    pub async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .post(self.recipes_url())
            .json(draft)
            .send()
            .await?;
        decode(response, "Error creating recipe").await
    }

    pub async fn update(&self, id: Uuid, draft: &RecipeDraft) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .put(self.recipe_url(id))
            .json(draft)
            .send()
            .await?;
        decode(response, "Error updating recipe").await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self.http.delete(self.recipe_url(id)).send().await?;
        decode::<serde_json::Value>(response, "Error deleting recipe").await?;
        Ok(())
    }

    pub async fn like(&self, id: Uuid) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .patch(format!("{}/api/recipes/{id}/like", self.base_url))
            .send()
            .await?;
        decode(response, "Error liking recipe").await
    }
}

/// Unwrap an envelope, turning failure envelopes into [`ClientError::Api`]
/// with the server's message when it provided one.
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback: &str,
) -> Result<T, ClientError> {
    let status = response.status();
    let envelope: WireEnvelope<T> = match response.json().await {
        Ok(envelope) => envelope,
        // A non-JSON error body (proxy page, empty 500) still needs a
        // user-facing message.
        Err(_) if !status.is_success() => return Err(ClientError::Api(fallback.to_string())),
        Err(err) => return Err(ClientError::Http(err)),
    };

    if status.is_success() && envelope.success {
        envelope
            .data
            .ok_or_else(|| ClientError::Api(fallback.to_string()))
    } else {
        Err(ClientError::Api(
            envelope.message.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}
