//! The recipe document store.
//!
//! Records live in an in-memory map guarded by a [`RwLock`]; a store
//! opened with [`RecipeStore::open`] additionally mirrors the map to a
//! single JSON document file after every successful mutation, written
//! atomically (temp file + rename) so a crash never leaves a torn file.
//!
//! Every operation is single-record and atomic under the store lock; in
//! particular [`RecipeStore::increment_likes`] bumps the counter while
//! holding the write lock, so concurrent likes on the same record are
//! never lost to a read-modify-write race.

pub mod validate;

pub use validate::{validate, FieldError, ValidRecipe, ValidationErrors};

use crate::models::{Cuisine, Recipe, RecipeDraft};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Recipe not found")]
    NotFound,

    #[error("Failed to persist recipe data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt recipe data file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A record plus its insertion sequence number.
///
/// The sequence breaks creation-timestamp ties so "newest first" is a
/// total, stable order even when two inserts land on the same instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecipe {
    seq: u64,
    recipe: Recipe,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<Uuid, StoredRecipe>,
    next_seq: u64,
}

/// Persistent collection of recipes with schema validation.
#[derive(Debug)]
pub struct RecipeStore {
    path: Option<PathBuf>,
    inner: RwLock<Inner>,
}

impl RecipeStore {
    /// Store with no backing file. State is lost on drop.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Store backed by a JSON document file, created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let records: HashMap<Uuid, StoredRecipe> = serde_json::from_str(&content)?;
            let next_seq = records.values().map(|r| r.seq + 1).max().unwrap_or(0);
            Inner { records, next_seq }
        } else {
            Inner::default()
        };

        Ok(Self {
            path: Some(path),
            inner: RwLock::new(inner),
        })
    }

    /// Validate and store a new recipe, assigning its identifier and
    /// timestamps. The store is untouched when validation fails.
    pub fn insert(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let valid = validate(draft).map_err(StoreError::Validation)?;

        let now = Utc::now();
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: valid.title,
            author: valid.author,
            cuisine: valid.cuisine,
            prep_time: valid.prep_time,
            difficulty: valid.difficulty,
            image: valid.image,
            ingredients: valid.ingredients,
            instructions: valid.instructions,
            likes: 0,
            created_at: now,
            updated_at: now,
        };

        let mut inner = self.write_lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(
            recipe.id,
            StoredRecipe {
                seq,
                recipe: recipe.clone(),
            },
        );
        self.persist(&inner)?;

        Ok(recipe)
    }

    /// All recipes, newest first, optionally narrowed to one cuisine.
    pub fn find_all(&self, cuisine: Option<Cuisine>) -> Vec<Recipe> {
        let inner = self.read_lock();
        let mut matches: Vec<&StoredRecipe> = inner
            .records
            .values()
            .filter(|r| cuisine.map_or(true, |c| r.recipe.cuisine == c))
            .collect();
        matches.sort_by(|a, b| {
            (b.recipe.created_at, b.seq).cmp(&(a.recipe.created_at, a.seq))
        });
        matches.into_iter().map(|r| r.recipe.clone()).collect()
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Recipe, StoreError> {
        self.read_lock()
            .records
            .get(&id)
            .map(|r| r.recipe.clone())
            .ok_or(StoreError::NotFound)
    }

    /// Full-field update with the same validation as insert.
    ///
    /// Identifier, creation time, and the likes counter are preserved;
    /// likes is outside the update contract and only moves through
    /// [`RecipeStore::increment_likes`].
    pub fn replace(&self, id: Uuid, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let mut inner = self.write_lock();
        if !inner.records.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        let valid = validate(draft).map_err(StoreError::Validation)?;

        let stored = inner.records.get_mut(&id).ok_or(StoreError::NotFound)?;
        let recipe = &mut stored.recipe;
        recipe.title = valid.title;
        recipe.author = valid.author;
        recipe.cuisine = valid.cuisine;
        recipe.prep_time = valid.prep_time;
        recipe.difficulty = valid.difficulty;
        recipe.image = valid.image;
        recipe.ingredients = valid.ingredients;
        recipe.instructions = valid.instructions;
        recipe.updated_at = Utc::now();

        let updated = recipe.clone();
        self.persist(&inner)?;
        Ok(updated)
    }

    /// Atomically bump the likes counter by one.
    pub fn increment_likes(&self, id: Uuid) -> Result<Recipe, StoreError> {
        let mut inner = self.write_lock();
        let stored = inner.records.get_mut(&id).ok_or(StoreError::NotFound)?;
        stored.recipe.likes += 1;
        stored.recipe.updated_at = Utc::now();

        let updated = stored.recipe.clone();
        self.persist(&inner)?;
        Ok(updated)
    }

    /// Remove a recipe permanently.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.write_lock();
        if inner.records.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        self.persist(&inner)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read_lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewrite the backing file, if any. Called with the write lock held
    /// so the file always matches the in-memory map.
    fn persist(&self, inner: &Inner) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&inner.records)?;
        let tmp = tmp_path(path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
