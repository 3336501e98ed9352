//! Recipe models

use serde::{Deserialize, Serialize};

use crate::request::QueryParams;

/// An ingredient line of a stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient line id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Owning recipe.
    #[serde(default)]
    pub recipe_id: Option<i64>,
    /// Ingredient name.
    pub name: String,
    /// Amount.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit of `quantity`.
    #[serde(default)]
    pub unit: Option<String>,
}

/// A recipe stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe id.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Preparation steps.
    #[serde(default)]
    pub instructions: String,
    /// Preparation time in minutes.
    #[serde(default, alias = "prep_time")]
    pub prep_time_minutes: Option<u32>,
    /// Calories per serving.
    #[serde(default, alias = "estimated_calories")]
    pub calories: Option<u32>,
    /// Picture.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Author, absent for imported recipes.
    #[serde(default, alias = "user_id")]
    pub created_by_user_id: Option<i64>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// Ingredient line submitted with a new recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientInput {
    /// Ingredient name.
    pub name: String,
    /// Amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Body of `POST /api/v1/recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCreate {
    /// Title.
    pub title: String,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preparation steps.
    pub instructions: String,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    /// Calories per serving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientInput>,
}

/// Body of `PUT /api/v1/recipes/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// New preparation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    /// New calories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// New picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Filters for `GET /api/v1/recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeFilter {
    /// Only recipes created by the caller.
    pub user_created_only: Option<bool>,
    /// Calorie ceiling.
    pub max_calories: Option<u32>,
    /// Preparation time ceiling in minutes.
    pub max_prep_time: Option<u32>,
    /// Required ingredients, sent as repeated `ingredients` parameters.
    pub ingredients: Vec<String>,
    /// Items to skip.
    pub skip: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl RecipeFilter {
    /// Encodes the filters, omitting absent ones.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("user_created_only", self.user_created_only);
        params.push_opt("max_calories", self.max_calories);
        params.push_opt("max_prep_time", self.max_prep_time);
        params.push_all("ingredients", &self.ingredients);
        params.push_opt("skip", self.skip);
        params.push_opt("limit", self.limit);
        params
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_repeats_ingredients() {
        let filter = RecipeFilter {
            user_created_only: Some(true),
            ingredients: vec!["tomato".to_string(), "cheese".to_string()],
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(
            filter.to_params().encode(),
            "user_created_only=true&ingredients=tomato&ingredients=cheese&limit=10"
        );
    }

    #[test]
    fn test_recipe_decodes_with_minimal_fields() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":9,"title":"Toast","estimated_calories":120}"#).unwrap();
        assert_eq!(recipe.calories, Some(120));
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, "");
    }

    #[test]
    fn test_create_omits_absent_fields() {
        let create = RecipeCreate {
            title: "Soup".to_string(),
            description: None,
            instructions: "Boil".to_string(),
            prep_time_minutes: Some(20),
            calories: None,
            image_url: None,
            ingredients: vec![RecipeIngredientInput {
                name: "Water".to_string(),
                quantity: Some(1.0),
                unit: Some("L".to_string()),
            }],
        };
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            serde_json::json!({
                "title": "Soup",
                "instructions": "Boil",
                "prep_time_minutes": 20,
                "ingredients": [{"name": "Water", "quantity": 1.0, "unit": "L"}]
            })
        );
    }
}
