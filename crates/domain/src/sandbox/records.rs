//! Sandbox records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Locally stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUser {
    /// Profile id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Avatar path.
    pub avatar: String,
    /// Always true while a profile is stored.
    pub is_logged_in: bool,
}

/// An ingredient in the local pantry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient id.
    pub id: String,
    /// Name.
    pub name: String,
    /// Free-text quantity, e.g. `500g`.
    pub quantity: String,
    /// Category id.
    pub category: String,
    /// Optional expiry date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    /// When it was added.
    pub added_date: DateTime<Utc>,
}

/// Fields supplied when adding an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngredientDraft {
    /// Name.
    pub name: String,
    /// Free-text quantity.
    pub quantity: String,
    /// Category id.
    pub category: String,
    /// Optional expiry date.
    pub expiry_date: Option<NaiveDate>,
}

/// A review left on a sandbox recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Author avatar path.
    #[serde(default)]
    pub avatar: String,
    /// Text.
    pub content: String,
    /// Star rating.
    pub rating: f64,
    /// When it was written.
    pub created_at: DateTime<Utc>,
    /// Nested replies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Self>,
}

/// A recipe in the sandbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxRecipe {
    /// Recipe id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Picture path.
    pub image: String,
    /// Free-text duration, e.g. `40 min`.
    pub time: String,
    /// Difficulty label.
    pub difficulty: String,
    /// Mean rating.
    pub rating: f64,
    /// Number of ratings.
    pub reviews: u32,
    /// Ingredient lines.
    pub ingredients: Vec<String>,
    /// Steps.
    pub instructions: Vec<String>,
    /// Category label.
    pub category: String,
    /// Mirrors membership in the favourites list.
    pub is_favorite: bool,
    /// Whether the local user wrote it.
    pub is_own: bool,
    /// Author name.
    pub author: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Reviews.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Fields supplied when adding a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Picture path.
    pub image: String,
    /// Free-text duration.
    pub time: String,
    /// Difficulty label.
    pub difficulty: String,
    /// Ingredient lines.
    pub ingredients: Vec<String>,
    /// Steps.
    pub instructions: Vec<String>,
    /// Category label.
    pub category: String,
    /// Author name.
    pub author: String,
}

/// A standalone comment written by the local user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComment {
    /// Caller-chosen id.
    pub id: String,
    /// Text.
    pub content: String,
    /// Star rating.
    pub rating: f64,
    /// When it was written.
    pub created_at: DateTime<Utc>,
}

/// A line on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Item id.
    pub id: String,
    /// Name.
    pub name: String,
    /// Free-text quantity.
    pub quantity: String,
    /// Category id.
    pub category: String,
    /// Ticked off.
    pub completed: bool,
    /// Day it was added.
    pub added_date: NaiveDate,
}

/// Meal of the day a recipe is planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
    /// Anything in between.
    Snack,
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(format!("unknown meal slot: {other}")),
        }
    }
}

/// A recipe planned for one meal of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    /// Entry id.
    pub id: String,
    /// Day.
    pub date: NaiveDate,
    /// Meal of the day.
    pub slot: MealSlot,
    /// Planned sandbox recipe.
    pub recipe_id: String,
}

/// Profile fields to change; absent fields are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New avatar path.
    pub avatar: Option<String>,
}

/// Ingredient fields to change; absent fields are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientPatch {
    /// New name.
    pub name: Option<String>,
    /// New quantity.
    pub quantity: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New expiry date.
    pub expiry_date: Option<NaiveDate>,
}

/// Recipe fields to change; absent fields are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipePatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New duration.
    pub time: Option<String>,
    /// New difficulty.
    pub difficulty: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New ingredient lines.
    pub ingredients: Option<Vec<String>>,
    /// New steps.
    pub instructions: Option<Vec<String>>,
}

/// Fields supplied when reviewing a recipe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentDraft {
    /// Author name.
    pub author: String,
    /// Author avatar path.
    pub avatar: String,
    /// Text.
    pub content: String,
    /// Star rating.
    pub rating: f64,
}
