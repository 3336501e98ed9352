//! Local sandbox dataset
//!
//! A demo dataset persisted on the client only. It never talks to the
//! backend and shares no types with the backend-synced models.

mod records;
mod state;

pub use records::{
    Comment, CommentDraft, Ingredient, IngredientDraft, IngredientPatch, LocalUser, MealPlanEntry,
    MealSlot, ProfileUpdate, RecipeDraft, RecipePatch, SandboxRecipe, ShoppingItem, UserComment,
};
pub use state::{ALL_CATEGORIES, DEFAULT_SHOPPING_CATEGORY, SANDBOX_STORAGE_KEY, SandboxState};
