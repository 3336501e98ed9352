//! AI generation models

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/gemini/recipe-suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSuggestionRequest {
    /// Names of the ingredients on hand.
    pub pantry_items: Vec<String>,
}

/// One suggested recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    /// Title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Steps.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Difficulty label.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of `POST /api/v1/gemini/analyze-item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeItemRequest {
    /// Ingredient to analyze.
    pub item_name: String,
}

/// Storage and usage advice for one ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAnalysis {
    /// Food category.
    pub category: String,
    /// Storage advice.
    pub storage_tips: Vec<String>,
    /// Expected shelf life.
    pub shelf_life: String,
    /// Nutrition summary.
    pub nutritional_info: String,
    /// Recipes that use the item.
    pub recipe_suggestions: Vec<String>,
}

/// Body of `POST /api/v1/ai/custom-recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomRecipeRequest {
    /// Pantry items the recipe must use.
    pub pantry_item_ids: Vec<i64>,
    /// Calorie ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<u32>,
    /// Preparation time ceiling in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time_limit: Option<u32>,
    /// Dietary restriction, e.g. `vegetarian`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    /// Preferred cuisine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_preference: Option<String>,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// Ingredient line of a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipeIngredient {
    /// Ingredient name.
    pub name: String,
    /// Amount.
    #[serde(default)]
    pub quantity: f64,
    /// Unit.
    #[serde(default)]
    pub unit: String,
}

/// A recipe produced by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Recipe name.
    pub recipe_name: String,
    /// Steps.
    #[serde(default)]
    pub instructions: String,
    /// Calories.
    #[serde(default)]
    pub estimated_calories: Option<u32>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub preparation_time_minutes: Option<u32>,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<GeneratedRecipeIngredient>,
}

/// A pantry item consumed by a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsedPantryItem {
    /// Pantry item id.
    pub pantry_item_id: i64,
    /// Pantry item name.
    pub item_name: String,
    /// Amount used.
    #[serde(default)]
    pub quantity_used: f64,
    /// Unit.
    #[serde(default)]
    pub unit: String,
}

/// Generator bookkeeping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationMetadata {
    /// Model name.
    pub model_used: String,
    /// Seconds spent generating.
    pub generation_time: f64,
    /// Prompt size.
    pub prompt_tokens: Option<u64>,
    /// Answer size.
    pub completion_tokens: Option<u64>,
}

/// Answer of `POST /api/v1/ai/custom-recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRecipeResponse {
    /// The recipe.
    pub generated_recipe: GeneratedRecipe,
    /// Pantry items it uses.
    #[serde(default)]
    pub used_pantry_items: Vec<UsedPantryItem>,
    /// Generator bookkeeping.
    #[serde(default)]
    pub generation_metadata: GenerationMetadata,
    /// Generation session id.
    #[serde(default)]
    pub generation_id: Option<String>,
}
