//! Backend wire models
//!
//! Typed request and response bodies for every endpoint the client calls.
//! Unknown fields are ignored and optional fields default, so additive
//! backend changes never break decoding.

mod ai;
mod mealdb;
mod pantry;
mod preferences;
mod recipe;
mod recommendation;
mod user;

pub use ai::{
    AnalyzeItemRequest, CustomRecipeRequest, CustomRecipeResponse, GeneratedRecipe,
    GeneratedRecipeIngredient, GenerationMetadata, ItemAnalysis, RecipeSuggestion,
    RecipeSuggestionRequest, UsedPantryItem,
};
pub use mealdb::{
    MealDbArea, MealDbAreasResponse, MealDbCategoriesResponse, MealDbCategory, MealDbImport,
    MealDbImportResult, MealDbIngredient, MealDbIngredientInfo, MealDbIngredientsResponse,
    MealDbMeal, MealDbSearch, MealDbSearchResponse,
};
pub use pantry::{PantryItem, PantryItemCreate, PantryItemUpdate, PantryQuery, SortOrder};
pub use preferences::{PreferenceOptions, UserPreferences, UserPreferencesUpdate};
pub use recipe::{Recipe, RecipeCreate, RecipeFilter, RecipeIngredient, RecipeIngredientInput, RecipeUpdate};
pub use recommendation::{
    ExpiringIngredient, MatchingIngredient, MissingIngredient, RecipeRecommendationsResponse,
    RecommendationParams, RecommendedRecipe,
};
pub use user::{LoginResponse, RegisterRequest, UserRead};

/// A record with a stable identity, used to apply server answers to a
/// local list snapshot.
pub trait Keyed {
    /// Identity type.
    type Key: PartialEq + Clone + std::fmt::Debug + Send + Sync;

    /// Returns the record's identity.
    fn key(&self) -> Self::Key;
}

impl Keyed for PantryItem {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Recipe {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}
