//! Command-line surface

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use planeats_application::client::DEFAULT_PANTRY_SUGGESTIONS;
use planeats_domain::models::{
    CustomRecipeRequest, MealDbSearch, PantryItemCreate, PantryItemUpdate, PantryQuery,
    RecipeFilter, RecommendationParams, SortOrder, UserPreferencesUpdate,
};
use planeats_domain::sandbox::IngredientDraft;

/// PlanEats client.
#[derive(Debug, Parser)]
#[command(name = "planeats", version, about = "PlanEats pantry and recipe client")]
pub struct Cli {
    /// Backend base URL, overriding the environment.
    #[arg(long, global = true, value_name = "url")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PLANEATS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Print the current session.
    Session,
    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PLANEATS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the logged-in user.
    Me,
    /// Dietary preferences.
    #[command(subcommand)]
    Preferences(PreferencesCommand),
    /// Backend pantry.
    #[command(subcommand)]
    Pantry(PantryCommand),
    /// Backend recipes.
    #[command(subcommand)]
    Recipes(RecipesCommand),
    /// AI generation.
    #[command(subcommand)]
    Ai(AiCommand),
    /// Recipes ranked against the pantry.
    Recommend(RecommendArgs),
    /// TheMealDB browsing and import.
    #[command(subcommand)]
    Mealdb(MealDbCommand),
    /// Local demo dataset.
    #[command(subcommand)]
    Sandbox(SandboxCommand),
}

#[derive(Debug, Subcommand)]
pub enum PantryCommand {
    /// List pantry items.
    List(PantryListArgs),
    /// Add an item.
    Add(PantryAddArgs),
    /// Change fields of an item.
    Update(PantryUpdateArgs),
    /// Delete an item.
    Remove { id: i64 },
}

#[derive(Debug, Args)]
pub struct PantryListArgs {
    #[arg(long)]
    pub skip: Option<u32>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub expiring_soon: bool,
    #[arg(long)]
    pub sort_by: Option<String>,
    #[arg(long, value_name = "asc|desc")]
    pub sort_order: Option<SortOrder>,
}

impl From<PantryListArgs> for PantryQuery {
    fn from(args: PantryListArgs) -> Self {
        Self {
            skip: args.skip,
            limit: args.limit,
            expiring_soon: args.expiring_soon.then_some(true),
            sort_by: args.sort_by,
            sort_order: args.sort_order,
        }
    }
}

#[derive(Debug, Args)]
pub struct PantryAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub quantity: f64,
    #[arg(long)]
    pub unit: String,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub expiration_date: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub purchase_date: Option<NaiveDate>,
    #[arg(long)]
    pub calories_per_unit: Option<f64>,
}

impl From<PantryAddArgs> for PantryItemCreate {
    fn from(args: PantryAddArgs) -> Self {
        Self {
            item_name: args.name,
            quantity: args.quantity,
            unit: args.unit,
            expiration_date: args.expiration_date.map(|d| d.to_string()),
            purchase_date: args.purchase_date.map(|d| d.to_string()),
            calories_per_unit: args.calories_per_unit,
        }
    }
}

#[derive(Debug, Args)]
pub struct PantryUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub quantity: Option<f64>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub expiration_date: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub purchase_date: Option<NaiveDate>,
    #[arg(long)]
    pub calories_per_unit: Option<f64>,
}

impl PantryUpdateArgs {
    /// Splits the target id from the fields to change.
    pub fn into_update(self) -> (i64, PantryItemUpdate) {
        let update = PantryItemUpdate {
            item_name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            expiration_date: self.expiration_date.map(|d| d.to_string()),
            purchase_date: self.purchase_date.map(|d| d.to_string()),
            calories_per_unit: self.calories_per_unit,
        };
        (self.id, update)
    }
}

#[derive(Debug, Subcommand)]
pub enum RecipesCommand {
    /// List recipes.
    List(RecipeListArgs),
    /// Show one recipe.
    Show { id: i64 },
    /// Recipes created by the caller.
    Mine,
    /// Recipes suggested for the caller.
    Suggestions,
    /// Delete a recipe.
    Remove { id: i64 },
}

#[derive(Debug, Args)]
pub struct RecipeListArgs {
    /// Only recipes created by the caller.
    #[arg(long)]
    pub mine_only: bool,
    #[arg(long)]
    pub max_calories: Option<u32>,
    #[arg(long)]
    pub max_prep_time: Option<u32>,
    /// Required ingredient; repeat for several.
    #[arg(long = "ingredient", value_name = "name")]
    pub ingredients: Vec<String>,
    #[arg(long)]
    pub skip: Option<u32>,
    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<RecipeListArgs> for RecipeFilter {
    fn from(args: RecipeListArgs) -> Self {
        Self {
            user_created_only: args.mine_only.then_some(true),
            max_calories: args.max_calories,
            max_prep_time: args.max_prep_time,
            ingredients: args.ingredients,
            skip: args.skip,
            limit: args.limit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum AiCommand {
    /// Recipe ideas from a list of ingredient names.
    Suggest {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Storage and nutrition notes for one ingredient.
    Analyze { item: String },
    /// Generate a recipe from pantry items.
    Custom(CustomRecipeArgs),
}

#[derive(Debug, Args)]
pub struct CustomRecipeArgs {
    /// Pantry item id; repeat for several.
    #[arg(long = "item-id", value_name = "id", required = true)]
    pub item_ids: Vec<i64>,
    #[arg(long)]
    pub max_calories: Option<u32>,
    #[arg(long)]
    pub max_prep_time: Option<u32>,
    #[arg(long)]
    pub diet: Option<String>,
    #[arg(long)]
    pub cuisine: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<CustomRecipeArgs> for CustomRecipeRequest {
    fn from(args: CustomRecipeArgs) -> Self {
        Self {
            pantry_item_ids: args.item_ids,
            max_calories: args.max_calories,
            preparation_time_limit: args.max_prep_time,
            dietary_restrictions: args.diet,
            cuisine_preference: args.cuisine,
            additional_notes: args.notes,
        }
    }
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    #[arg(long)]
    pub max_calories: Option<u32>,
    #[arg(long)]
    pub max_preparation_time: Option<u32>,
    #[arg(long)]
    pub max_missing_ingredients: Option<u32>,
    #[arg(long)]
    pub sort_by: Option<String>,
    #[arg(long, value_name = "asc|desc")]
    pub sort_order: Option<SortOrder>,
    /// Ignore stored preferences.
    #[arg(long)]
    pub no_preferences: bool,
}

impl From<RecommendArgs> for RecommendationParams {
    fn from(args: RecommendArgs) -> Self {
        Self {
            max_preparation_time: args.max_preparation_time,
            max_calories: args.max_calories,
            max_missing_ingredients: args.max_missing_ingredients,
            sort_by: args.sort_by,
            sort_order: args.sort_order,
            use_preferences: args.no_preferences.then_some(false),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum MealDbCommand {
    /// Search meals by name.
    Search { name: String },
    /// Browse meals by first letter, ingredient, category or area.
    Browse(MealDbBrowseArgs),
    /// Show one meal.
    Meal { meal_id: String },
    /// Show a random meal without importing it.
    Surprise,
    /// List meal categories.
    Categories,
    /// List cuisine areas.
    Areas,
    /// List known ingredients.
    Ingredients,
    /// Meals matching the pantry.
    Suggestions {
        #[arg(long, default_value_t = DEFAULT_PANTRY_SUGGESTIONS)]
        limit: u32,
    },
    /// Import a meal by its TheMealDB id.
    Import { meal_id: String },
    /// Import a random meal.
    Random,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct MealDbBrowseArgs {
    #[arg(long)]
    pub letter: Option<char>,
    #[arg(long)]
    pub ingredient: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub area: Option<String>,
}

impl MealDbBrowseArgs {
    /// The search the flags select, if any.
    pub fn into_search(self) -> Option<MealDbSearch> {
        self.letter
            .map(MealDbSearch::Letter)
            .or_else(|| self.ingredient.map(MealDbSearch::Ingredient))
            .or_else(|| self.category.map(MealDbSearch::Category))
            .or_else(|| self.area.map(MealDbSearch::Area))
    }
}

#[derive(Debug, Subcommand)]
pub enum PreferencesCommand {
    /// Print the stored preferences.
    Show,
    /// List the allowed values.
    Options,
    /// Change preferences. Unknown values are refused before sending.
    Set(PreferencesSetArgs),
}

#[derive(Debug, Args)]
pub struct PreferencesSetArgs {
    /// Dietary restriction, repeatable.
    #[arg(long = "diet")]
    pub dietary_restrictions: Vec<String>,
    /// Preferred cuisine, repeatable.
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
    #[arg(long)]
    pub calorie_goal: Option<u32>,
    #[arg(long)]
    pub max_prep_time: Option<u32>,
    #[arg(long)]
    pub max_calories: Option<u32>,
}

impl From<PreferencesSetArgs> for UserPreferencesUpdate {
    fn from(args: PreferencesSetArgs) -> Self {
        let non_empty = |values: Vec<String>| (!values.is_empty()).then_some(values);
        Self {
            dietary_restrictions: non_empty(args.dietary_restrictions),
            preferred_cuisines: non_empty(args.cuisines),
            preferred_difficulty: args.difficulty,
            daily_calorie_goal: args.calorie_goal,
            max_prep_time_preference: args.max_prep_time,
            max_calories_preference: args.max_calories,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum SandboxCommand {
    /// Print the whole dataset.
    Show,
    /// Add an ingredient to the local pantry.
    AddIngredient(IngredientArgs),
    /// Search local recipes.
    Search { query: String },
    /// Shopping list.
    #[command(subcommand)]
    Shop(ShopCommand),
    /// Restore the seeded dataset.
    Reset,
}

#[derive(Debug, Args)]
pub struct IngredientArgs {
    #[arg(long)]
    pub name: String,
    /// Free text, e.g. `500g`.
    #[arg(long)]
    pub quantity: String,
    #[arg(long, default_value = "outros")]
    pub category: String,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub expiry_date: Option<NaiveDate>,
}

impl From<IngredientArgs> for IngredientDraft {
    fn from(args: IngredientArgs) -> Self {
        Self {
            name: args.name,
            quantity: args.quantity,
            category: args.category,
            expiry_date: args.expiry_date,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ShopCommand {
    /// Add a line.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Tick a line on or off.
    Done { id: String },
    /// Drop every ticked line.
    Clear,
}
