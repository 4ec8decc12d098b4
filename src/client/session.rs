//! Session-scoped mirror of the remote recipe collection.
//!
//! Each intent kind (list, get, create, update, delete, like) owns its
//! own status slot, so one intent's pending or rejected state can never
//! clobber another's. Every dispatch of an intent also bumps that
//! intent's generation counter; a completion carrying a stale generation
//! is discarded, so a late response cannot overwrite the result of a
//! newer dispatch of the same intent.

use super::{ClientError, RecipeApi};
use crate::models::{Cuisine, Recipe, RecipeDraft};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// A named asynchronous client operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    List,
    Get,
    Create,
    Update,
    Delete,
    Like,
}

/// Lifecycle of one intent's most recent dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IntentStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected(String),
}

#[derive(Debug, Default)]
struct SessionState {
    recipes: Vec<Recipe>,
    current: Option<Recipe>,
    filter: Option<Cuisine>,
    status: HashMap<Intent, IntentStatus>,
    generation: HashMap<Intent, u64>,
}

impl SessionState {
    /// Mark an intent pending and return its new generation.
    fn begin(&mut self, intent: Intent) -> u64 {
        let generation = self.generation.entry(intent).or_insert(0);
        *generation += 1;
        self.status.insert(intent, IntentStatus::Pending);
        *generation
    }

    /// Whether a completion for `generation` is still the latest
    /// dispatch of `intent`.
    fn is_current(&self, intent: Intent, generation: u64) -> bool {
        self.generation.get(&intent).copied() == Some(generation)
    }

    fn fulfill(&mut self, intent: Intent) {
        self.status.insert(intent, IntentStatus::Fulfilled);
    }

    fn reject(&mut self, intent: Intent, message: String) {
        self.status.insert(intent, IntentStatus::Rejected(message));
    }

    /// Replace the record with a matching id in the collection and in
    /// the current-record slot.
    fn upsert_by_id(&mut self, recipe: Recipe) {
        if let Some(existing) = self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            *existing = recipe.clone();
        }
        if self.current.as_ref().is_some_and(|c| c.id == recipe.id) {
            self.current = Some(recipe);
        }
    }

    fn remove_by_id(&mut self, id: Uuid) {
        self.recipes.retain(|r| r.id != id);
    }
}

/// In-memory mirror of the recipe collection for one client session.
pub struct RecipeSession {
    api: RecipeApi,
    state: Mutex<SessionState>,
}

impl RecipeSession {
    pub fn new(api: RecipeApi) -> Self {
        Self {
            api,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Fetch the collection using the active cuisine filter. On success
    /// the whole collection is replaced.
    pub async fn load_recipes(&self) {
        let (generation, filter) = {
            let mut state = self.lock();
            (state.begin(Intent::List), state.filter)
        };

        let result = self.api.list(filter).await;

        let mut state = self.lock();
        if !state.is_current(Intent::List, generation) {
            return;
        }
        match result {
            Ok(recipes) => {
                state.recipes = recipes;
                state.fulfill(Intent::List);
            }
            Err(err) => state.reject(Intent::List, rejection_message(Intent::List, err)),
        }
    }

    /// Fetch one recipe into the current-record slot.
    pub async fn load_recipe(&self, id: Uuid) {
        let generation = self.lock().begin(Intent::Get);

        let result = self.api.get(id).await;

        let mut state = self.lock();
        if !state.is_current(Intent::Get, generation) {
            return;
        }
        match result {
            Ok(recipe) => {
                state.current = Some(recipe);
                state.fulfill(Intent::Get);
            }
            Err(err) => state.reject(Intent::Get, rejection_message(Intent::Get, err)),
        }
    }

    /// Submit a new recipe; on success it is prepended to the collection.
    pub async fn create_recipe(&self, draft: RecipeDraft) {
        let generation = self.lock().begin(Intent::Create);

        let result = self.api.create(&draft).await;

        let mut state = self.lock();
        if !state.is_current(Intent::Create, generation) {
            return;
        }
        match result {
            Ok(recipe) => {
                state.recipes.insert(0, recipe);
                state.fulfill(Intent::Create);
            }
            Err(err) => state.reject(Intent::Create, rejection_message(Intent::Create, err)),
        }
    }

    /// Replace a recipe's mutable fields; the updated record replaces
    /// the match in the collection and the current-record slot.
    pub async fn update_recipe(&self, id: Uuid, draft: RecipeDraft) {
        let generation = self.lock().begin(Intent::Update);

        let result = self.api.update(id, &draft).await;

        let mut state = self.lock();
        if !state.is_current(Intent::Update, generation) {
            return;
        }
        match result {
            Ok(recipe) => {
                state.upsert_by_id(recipe);
                state.fulfill(Intent::Update);
            }
            Err(err) => state.reject(Intent::Update, rejection_message(Intent::Update, err)),
        }
    }

    /// Delete a recipe; on success it is removed from the collection.
    pub async fn delete_recipe(&self, id: Uuid) {
        let generation = self.lock().begin(Intent::Delete);

        let result = self.api.delete(id).await;

        let mut state = self.lock();
        if !state.is_current(Intent::Delete, generation) {
            return;
        }
        match result {
            Ok(()) => {
                state.remove_by_id(id);
                state.fulfill(Intent::Delete);
            }
            Err(err) => state.reject(Intent::Delete, rejection_message(Intent::Delete, err)),
        }
    }

    /// Like a recipe; the updated likes count lands wherever the record
    /// appears.
    pub async fn like_recipe(&self, id: Uuid) {
        let generation = self.lock().begin(Intent::Like);

        let result = self.api.like(id).await;

        let mut state = self.lock();
        if !state.is_current(Intent::Like, generation) {
            return;
        }
        match result {
            Ok(recipe) => {
                state.upsert_by_id(recipe);
                state.fulfill(Intent::Like);
            }
            Err(err) => state.reject(Intent::Like, rejection_message(Intent::Like, err)),
        }
    }

    /// Record the cuisine filter. Does not fetch; the presentation layer
    /// re-triggers [`RecipeSession::load_recipes`] when it wants fresh
    /// data.
    pub fn set_filter(&self, cuisine: Option<Cuisine>) {
        self.lock().filter = cuisine;
    }

    pub fn filter(&self) -> Option<Cuisine> {
        self.lock().filter
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.lock().recipes.clone()
    }

    pub fn current_recipe(&self) -> Option<Recipe> {
        self.lock().current.clone()
    }

    pub fn status(&self, intent: Intent) -> IntentStatus {
        self.lock().status.get(&intent).cloned().unwrap_or_default()
    }

    pub fn is_loading(&self, intent: Intent) -> bool {
        self.status(intent) == IntentStatus::Pending
    }

    pub fn error(&self, intent: Intent) -> Option<String> {
        match self.status(intent) {
            IntentStatus::Rejected(message) => Some(message),
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // Never held across an await.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn rejection_message(intent: Intent, err: ClientError) -> String {
    match err {
        ClientError::Api(message) => message,
        ClientError::Http(_) => match intent {
            Intent::List => "Error fetching recipes".to_string(),
            Intent::Get => "Error fetching recipe".to_string(),
            Intent::Create => "Error creating recipe".to_string(),
            Intent::Update => "Error updating recipe".to_string(),
            Intent::Delete => "Error deleting recipe".to_string(),
            Intent::Like => "Error liking recipe".to_string(),
        },
    }
}
