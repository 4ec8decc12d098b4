use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed set of cuisines a recipe can be filed under.
///
/// Kept as an enum (rather than a free string) so validation and the
/// cuisine filter are exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Cuisine {
    Italian,
    Japanese,
    Mexican,
    Indian,
    Healthy,
    Other,
}

impl Cuisine {
    /// All cuisines, in the order the UI filter presents them.
    pub const ALL: [Cuisine; 6] = [
        Cuisine::Italian,
        Cuisine::Japanese,
        Cuisine::Mexican,
        Cuisine::Indian,
        Cuisine::Healthy,
        Cuisine::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Japanese => "Japanese",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::Healthy => "Healthy",
            Cuisine::Other => "Other",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Difficulty rating for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}

/// A stored recipe as it appears on the wire.
///
/// Field names are camelCase in JSON to match the public API shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub cuisine: Cuisine,
    pub prep_time: String,
    pub difficulty: Difficulty,
    /// Image URL.
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body shared by create and update.
///
/// `cuisine` and `difficulty` arrive as plain strings so that an
/// out-of-enum value is reported as a field-level validation error
/// instead of a deserialization failure. `likes` is deliberately
/// absent: it only ever changes through the like endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
}
