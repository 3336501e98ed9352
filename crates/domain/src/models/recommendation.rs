//! Pantry-based recommendation models

use serde::{Deserialize, Serialize};

use super::SortOrder;
use crate::request::QueryParams;

/// Query parameters of `GET /api/v1/recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationParams {
    /// Preparation time ceiling in minutes.
    pub max_preparation_time: Option<u32>,
    /// Calorie ceiling.
    pub max_calories: Option<u32>,
    /// How many ingredients may be missing from the pantry.
    pub max_missing_ingredients: Option<u32>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Whether to apply the stored user preferences.
    pub use_preferences: Option<bool>,
}

impl RecommendationParams {
    /// Encodes the parameters, omitting absent ones.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("max_preparation_time", self.max_preparation_time);
        params.push_opt("max_calories", self.max_calories);
        params.push_opt("max_missing_ingredients", self.max_missing_ingredients);
        params.push_opt("sort_by", self.sort_by.as_deref());
        params.push_opt("sort_order", self.sort_order);
        params.push_opt("use_preferences", self.use_preferences);
        params
    }
}

/// A recipe ingredient the pantry covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingIngredient {
    /// Pantry item id.
    pub pantry_item_id: i64,
    /// Pantry item name.
    pub pantry_item_name: String,
    /// Name in the recipe.
    pub recipe_ingredient_name: String,
    /// Amount on hand.
    #[serde(default)]
    pub pantry_quantity: f64,
    /// Unit on hand.
    #[serde(default)]
    pub pantry_unit: String,
    /// Amount needed.
    #[serde(default)]
    pub required_quantity: f64,
    /// Unit needed.
    #[serde(default)]
    pub required_unit: String,
}

/// A recipe ingredient the pantry lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingIngredient {
    /// Ingredient name.
    pub ingredient_name: String,
    /// Amount needed.
    #[serde(default)]
    pub required_quantity: f64,
    /// Unit needed.
    #[serde(default)]
    pub required_unit: String,
}

/// A pantry item close to expiry that the recipe uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringIngredient {
    /// Pantry item id.
    pub pantry_item_id: i64,
    /// Pantry item name.
    pub pantry_item_name: String,
    /// Expiry date.
    pub expiration_date: String,
    /// Days left.
    pub days_until_expiration: i64,
}

/// One recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRecipe {
    /// Recipe id.
    pub recipe_id: i64,
    /// Recipe name.
    pub recipe_name: String,
    /// Calories.
    #[serde(default)]
    pub estimated_calories: Option<u32>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub preparation_time_minutes: Option<u32>,
    /// Picture.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Steps.
    #[serde(default)]
    pub instructions: String,
    /// Covered ingredients.
    #[serde(default)]
    pub matching_ingredients: Vec<MatchingIngredient>,
    /// Lacking ingredients.
    #[serde(default)]
    pub missing_ingredients: Vec<MissingIngredient>,
    /// Pantry coverage between 0 and 1.
    #[serde(default)]
    pub match_score: f64,
    /// Expiring items used.
    #[serde(default)]
    pub expiring_ingredients_used: Vec<ExpiringIngredient>,
}

/// Answer of `GET /api/v1/recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecommendationsResponse {
    /// Ranked recommendations.
    #[serde(default)]
    pub recommendations: Vec<RecommendedRecipe>,
    /// Pantry size considered.
    #[serde(default)]
    pub total_pantry_items: u32,
    /// Recipes scanned.
    #[serde(default)]
    pub total_recipes_analyzed: u32,
    /// Informative message when nothing matched.
    #[serde(default)]
    pub message: Option<String>,
}
