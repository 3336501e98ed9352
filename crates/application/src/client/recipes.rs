//! Recipe endpoints

use planeats_domain::models::{Recipe, RecipeCreate, RecipeFilter, RecipeUpdate};
use planeats_domain::{ApiRequest, ApiResponse};

use super::{API_PREFIX, ApiClient};

impl ApiClient {
    /// `GET /api/v1/recipes`, with the filter's parameters.
    pub async fn list_recipes(&self, filter: &RecipeFilter) -> ApiResponse<Vec<Recipe>> {
        let endpoint = filter.to_params().append_to(&format!("{API_PREFIX}/recipes"));
        self.request(ApiRequest::get(endpoint)).await
    }

    /// `GET /api/v1/recipes/{id}`.
    pub async fn get_recipe(&self, id: i64) -> ApiResponse<Recipe> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/recipes/{id}")))
            .await
    }

    /// `POST /api/v1/recipes`.
    pub async fn create_recipe(&self, recipe: &RecipeCreate) -> ApiResponse<Recipe> {
        self.request(ApiRequest::post(format!("{API_PREFIX}/recipes")).json(recipe))
            .await
    }

    /// `PUT /api/v1/recipes/{id}`.
    pub async fn update_recipe(&self, id: i64, update: &RecipeUpdate) -> ApiResponse<Recipe> {
        self.request(ApiRequest::put(format!("{API_PREFIX}/recipes/{id}")).json(update))
            .await
    }

    /// `DELETE /api/v1/recipes/{id}`.
    pub async fn delete_recipe(&self, id: i64) -> ApiResponse<serde_json::Value> {
        self.request(ApiRequest::delete(format!("{API_PREFIX}/recipes/{id}")))
            .await
    }

    /// `GET /api/v1/recipes/my-recipes`.
    pub async fn my_recipes(&self) -> ApiResponse<Vec<Recipe>> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/recipes/my-recipes")))
            .await
    }

    /// `GET /api/v1/recipes/suggestions`.
    pub async fn suggested_recipes(&self) -> ApiResponse<Vec<Recipe>> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/recipes/suggestions")))
            .await
    }
}
