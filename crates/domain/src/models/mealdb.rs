//! TheMealDB browse and import models

use serde::{Deserialize, Serialize};

use crate::request::QueryParams;

/// Ingredient line of a `MealDB` meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbIngredient {
    /// Ingredient name.
    pub name: String,
    /// Free-text measure.
    #[serde(default)]
    pub measure: String,
}

/// A meal as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbMeal {
    /// `MealDB` id.
    pub id: String,
    /// Meal name.
    pub name: String,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
    /// Cuisine area.
    #[serde(default)]
    pub area: Option<String>,
    /// Steps.
    #[serde(default)]
    pub instructions: String,
    /// Picture.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<MealDbIngredient>,
    /// Video link.
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// Source link.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Comma-separated tags.
    #[serde(default)]
    pub tags: Option<String>,
}

/// Answer of `GET /api/v1/mealdb/search`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDbSearchResponse {
    /// Matching meals.
    pub meals: Vec<MealDbMeal>,
    /// Match count.
    pub total: u32,
}

/// One way of querying `GET /api/v1/mealdb/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealDbSearch {
    /// Meals whose name contains the text.
    Name(String),
    /// Meals whose name starts with the letter.
    Letter(char),
    /// Meals using the main ingredient.
    Ingredient(String),
    /// Meals in the category.
    Category(String),
    /// Meals from the cuisine area.
    Area(String),
}

impl MealDbSearch {
    /// Encodes the search as its single query parameter.
    ///
    /// # Errors
    /// Returns a message when a letter search is not alphabetic.
    pub fn to_params(&self) -> Result<QueryParams, String> {
        let mut params = QueryParams::new();
        match self {
            Self::Name(name) => params.push("name", name),
            Self::Letter(letter) if letter.is_ascii_alphabetic() => {
                params.push("letter", letter.to_ascii_lowercase());
            }
            Self::Letter(_) => {
                return Err("letter must be a single alphabetic character".to_string());
            }
            Self::Ingredient(ingredient) => params.push("ingredient", ingredient),
            Self::Category(category) => params.push("category", category),
            Self::Area(area) => params.push("area", area),
        }
        Ok(params)
    }
}

/// A meal category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbCategory {
    /// `MealDB` id.
    pub id: String,
    /// Category name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Thumbnail.
    #[serde(default)]
    pub image_url: String,
}

/// A cuisine area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbArea {
    /// Area name, e.g. `Italian`.
    pub name: String,
}

/// An ingredient known to `MealDB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbIngredientInfo {
    /// Ingredient name.
    pub name: String,
    /// Long description, often missing.
    #[serde(default)]
    pub description: Option<String>,
    /// Ingredient type, e.g. `Meat`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Answer of `GET /api/v1/mealdb/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDbCategoriesResponse {
    /// Categories.
    pub categories: Vec<MealDbCategory>,
    /// Category count.
    pub total: u32,
}

/// Answer of `GET /api/v1/mealdb/areas`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDbAreasResponse {
    /// Areas.
    pub areas: Vec<MealDbArea>,
    /// Area count.
    pub total: u32,
}

/// Answer of `GET /api/v1/mealdb/ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDbIngredientsResponse {
    /// Ingredients.
    pub ingredients: Vec<MealDbIngredientInfo>,
    /// Ingredient count.
    pub total: u32,
}

/// Outcome of importing one meal into the user's recipes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDbImportResult {
    /// Whether the import succeeded.
    pub success: bool,
    /// Id of the created recipe.
    pub recipe_id: Option<i64>,
    /// Name of the created recipe.
    pub recipe_name: Option<String>,
    /// Source `MealDB` id.
    pub mealdb_id: Option<String>,
    /// Estimated calories.
    pub estimated_calories: Option<u32>,
    /// Estimated preparation time.
    pub estimated_prep_time: Option<u32>,
    /// Ingredient count.
    pub ingredients_count: Option<u32>,
    /// Failure reason.
    pub error: Option<String>,
}

/// Answer of the `MealDB` import endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MealDbImport {
    /// Human-readable summary.
    pub message: String,
    /// Import details.
    pub recipe: MealDbImportResult,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_answer_decodes() {
        let import: MealDbImport = serde_json::from_str(
            r#"{"message":"Successfully imported recipe 'Teriyaki Chicken'",
                "recipe":{"success":true,"recipe_id":17,"recipe_name":"Teriyaki Chicken","mealdb_id":"52772"}}"#,
        )
        .unwrap();
        assert!(import.recipe.success);
        assert_eq!(import.recipe.recipe_id, Some(17));
        assert_eq!(import.recipe.error, None);
    }

    #[test]
    fn test_search_params() {
        assert_eq!(
            MealDbSearch::Name("beef stew".to_string())
                .to_params()
                .unwrap()
                .encode(),
            "name=beef+stew"
        );
        assert_eq!(MealDbSearch::Letter('B').to_params().unwrap().encode(), "letter=b");
        assert_eq!(
            MealDbSearch::Area("Italian".to_string())
                .to_params()
                .unwrap()
                .encode(),
            "area=Italian"
        );
        assert!(MealDbSearch::Letter('7').to_params().is_err());
        assert!(MealDbSearch::Letter('é').to_params().is_err());
    }

    #[test]
    fn test_ingredient_info_type_field() {
        let list: MealDbIngredientsResponse = serde_json::from_str(
            r#"{"ingredients":[{"name":"Chicken","type":"Meat"},{"name":"Salt"}],"total":2}"#,
        )
        .unwrap();
        assert_eq!(list.ingredients[0].kind.as_deref(), Some("Meat"));
        assert_eq!(list.ingredients[1].description, None);
        assert_eq!(list.total, 2);
    }

    #[test]
    fn test_search_defaults_to_empty() {
        let search: MealDbSearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(search, MealDbSearchResponse::default());
    }
}
