//! `TheMealDB` proxy endpoints
//!
//! Browsing is public; imports and pantry suggestions need a session.

use planeats_domain::models::{
    MealDbAreasResponse, MealDbCategoriesResponse, MealDbImport, MealDbIngredientsResponse,
    MealDbMeal, MealDbSearch, MealDbSearchResponse,
};
use planeats_domain::{ApiError, ApiErrorKind, ApiRequest, ApiResponse, QueryParams};

use super::{API_PREFIX, ApiClient};

/// Default `limit` of the pantry suggestions endpoint.
pub const DEFAULT_PANTRY_SUGGESTIONS: u32 = 10;

impl ApiClient {
    /// `GET /api/v1/mealdb/search?name=`.
    pub async fn search_mealdb(&self, name: &str) -> ApiResponse<MealDbSearchResponse> {
        self.browse_mealdb(&MealDbSearch::Name(name.to_string()))
            .await
    }

    /// `GET /api/v1/mealdb/search` by name, first letter, ingredient,
    /// category or area.
    ///
    /// A non-alphabetic letter is refused locally and never sent.
    pub async fn browse_mealdb(
        &self,
        search: &MealDbSearch,
    ) -> ApiResponse<MealDbSearchResponse> {
        let params = match search.to_params() {
            Ok(params) => params,
            Err(message) => {
                return ApiResponse::error(ApiError::new(ApiErrorKind::InvalidRequest, message), 0);
            }
        };
        let endpoint = params.append_to(&format!("{API_PREFIX}/mealdb/search"));
        self.request(ApiRequest::get(endpoint).public()).await
    }

    /// `GET /api/v1/mealdb/meal/{meal_id}`.
    pub async fn mealdb_meal(&self, meal_id: &str) -> ApiResponse<MealDbMeal> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/mealdb/meal/{meal_id}")).public())
            .await
    }

    /// `GET /api/v1/mealdb/random`.
    pub async fn random_mealdb_meal(&self) -> ApiResponse<MealDbMeal> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/mealdb/random")).public())
            .await
    }

    /// `GET /api/v1/mealdb/categories`.
    pub async fn mealdb_categories(&self) -> ApiResponse<MealDbCategoriesResponse> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/mealdb/categories")).public())
            .await
    }

    /// `GET /api/v1/mealdb/areas`.
    pub async fn mealdb_areas(&self) -> ApiResponse<MealDbAreasResponse> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/mealdb/areas")).public())
            .await
    }

    /// `GET /api/v1/mealdb/ingredients`.
    pub async fn mealdb_ingredients(&self) -> ApiResponse<MealDbIngredientsResponse> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/mealdb/ingredients")).public())
            .await
    }

    /// `GET /api/v1/mealdb/suggestions-by-pantry?limit=`, meals matching the
    /// caller's pantry.
    pub async fn mealdb_pantry_suggestions(
        &self,
        limit: u32,
    ) -> ApiResponse<MealDbSearchResponse> {
        let mut params = QueryParams::new();
        params.push("limit", limit);
        let endpoint = params.append_to(&format!("{API_PREFIX}/mealdb/suggestions-by-pantry"));
        self.request(ApiRequest::get(endpoint)).await
    }

    /// `POST /api/v1/mealdb/import/{meal_id}`.
    pub async fn import_mealdb_meal(&self, meal_id: &str) -> ApiResponse<MealDbImport> {
        self.request(ApiRequest::post(format!("{API_PREFIX}/mealdb/import/{meal_id}")))
            .await
    }

    /// `POST /api/v1/mealdb/import-random`.
    pub async fn import_random_mealdb_meal(&self) -> ApiResponse<MealDbImport> {
        self.request(ApiRequest::post(format!("{API_PREFIX}/mealdb/import-random")))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedHttpClient, StaticCredentials, json_response};
    use planeats_domain::HttpMethod;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_search_encodes_name() {
        let http = ScriptedHttpClient::new(vec![Ok(json_response(
            200,
            r#"{"meals":[],"total":0}"#,
        ))]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let found = api.search_mealdb("chicken curry").await.into_result().unwrap();
        assert_eq!(found.total, 0);
        assert_eq!(
            http.requests()[0].url,
            "http://api.test/api/v1/mealdb/search?name=chicken+curry"
        );
    }

    #[tokio::test]
    async fn test_browse_variants_are_public_gets() {
        let empty = r#"{"meals":[],"total":0}"#;
        let http = ScriptedHttpClient::new(vec![
            Ok(json_response(200, empty)),
            Ok(json_response(200, empty)),
            Ok(json_response(200, empty)),
        ]);
        let api = ApiClient::new(http.clone(), "http://api.test")
            .with_credentials(Arc::new(StaticCredentials::new("tok")));

        api.browse_mealdb(&MealDbSearch::Letter('K')).await.into_result().unwrap();
        api.browse_mealdb(&MealDbSearch::Ingredient("chicken breast".to_string()))
            .await
            .into_result()
            .unwrap();
        api.browse_mealdb(&MealDbSearch::Category("Seafood".to_string()))
            .await
            .into_result()
            .unwrap();

        let sent = http.requests();
        assert_eq!(sent[0].url, "http://api.test/api/v1/mealdb/search?letter=k");
        assert_eq!(
            sent[1].url,
            "http://api.test/api/v1/mealdb/search?ingredient=chicken+breast"
        );
        assert_eq!(sent[2].url, "http://api.test/api/v1/mealdb/search?category=Seafood");
        assert!(sent.iter().all(|r| r.method == HttpMethod::Get));
        assert!(sent.iter().all(|r| !r.headers.contains("Authorization")));
    }

    #[tokio::test]
    async fn test_invalid_letter_is_not_sent() {
        let http = ScriptedHttpClient::new(vec![]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let response = api.browse_mealdb(&MealDbSearch::Letter('3')).await;
        let error = response.error_ref().unwrap();
        assert_eq!(error.kind, ApiErrorKind::InvalidRequest);
        assert_eq!(response.status(), 0);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_and_listing_endpoints() {
        let meal = r#"{"id":"52772","name":"Teriyaki Chicken Casserole","category":"Chicken",
            "instructions":"Preheat oven","ingredients":[{"name":"soy sauce","measure":"3/4 cup"}]}"#;
        let http = ScriptedHttpClient::new(vec![
            Ok(json_response(200, meal)),
            Ok(json_response(200, meal)),
            Ok(json_response(
                200,
                r#"{"categories":[{"id":"1","name":"Beef","description":"","image_url":""}],"total":1}"#,
            )),
            Ok(json_response(200, r#"{"areas":[{"name":"Italian"}],"total":1}"#)),
            Ok(json_response(200, r#"{"ingredients":[],"total":0}"#)),
            Ok(json_response(404, r#"{"detail":"Meal with ID 1 not found"}"#)),
        ]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let found = api.mealdb_meal("52772").await.into_result().unwrap();
        assert_eq!(found.ingredients[0].measure, "3/4 cup");
        assert_eq!(
            api.random_mealdb_meal().await.into_result().unwrap().id,
            "52772"
        );
        let categories = api.mealdb_categories().await.into_result().unwrap();
        assert_eq!(categories.categories[0].name, "Beef");
        let areas = api.mealdb_areas().await.into_result().unwrap();
        assert_eq!(areas.areas[0].name, "Italian");
        assert_eq!(api.mealdb_ingredients().await.into_result().unwrap().total, 0);

        let missing = api.mealdb_meal("1").await;
        assert_eq!(missing.status(), 404);
        assert_eq!(missing.error_ref().unwrap().message, "Meal with ID 1 not found");

        let urls: Vec<_> = http.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/api/v1/mealdb/meal/52772",
                "http://api.test/api/v1/mealdb/random",
                "http://api.test/api/v1/mealdb/categories",
                "http://api.test/api/v1/mealdb/areas",
                "http://api.test/api/v1/mealdb/ingredients",
                "http://api.test/api/v1/mealdb/meal/1",
            ]
        );
    }

    #[tokio::test]
    async fn test_pantry_suggestions_are_authenticated() {
        let http = ScriptedHttpClient::new(vec![Ok(json_response(
            200,
            r#"{"meals":[],"total":0}"#,
        ))]);
        let api = ApiClient::new(http.clone(), "http://api.test")
            .with_credentials(Arc::new(StaticCredentials::new("tok")));

        api.mealdb_pantry_suggestions(DEFAULT_PANTRY_SUGGESTIONS)
            .await
            .into_result()
            .unwrap();

        let sent = &http.requests()[0];
        assert_eq!(
            sent.url,
            "http://api.test/api/v1/mealdb/suggestions-by-pantry?limit=10"
        );
        assert_eq!(sent.headers.get("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_imports_are_posts_without_body() {
        let http = ScriptedHttpClient::new(vec![
            Ok(json_response(200, r#"{"message":"imported"}"#)),
            Ok(json_response(200, r#"{"message":"imported"}"#)),
        ]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        assert!(api.import_mealdb_meal("52772").await.is_data());
        assert!(api.import_random_mealdb_meal().await.is_data());

        let sent = http.requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://api.test/api/v1/mealdb/import/52772");
        assert_eq!(sent[0].body, None);
        assert_eq!(sent[1].url, "http://api.test/api/v1/mealdb/import-random");
    }
}
