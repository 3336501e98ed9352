//! AI generation endpoints

use planeats_domain::models::{
    AnalyzeItemRequest, CustomRecipeRequest, CustomRecipeResponse, ItemAnalysis,
    RecipeSuggestion, RecipeSuggestionRequest,
};
use planeats_domain::{ApiRequest, ApiResponse};

use super::{API_PREFIX, ApiClient};

impl ApiClient {
    /// `POST /api/v1/gemini/recipe-suggestions`.
    pub async fn generate_recipe_suggestions(
        &self,
        pantry_items: &[String],
    ) -> ApiResponse<Vec<RecipeSuggestion>> {
        let body = RecipeSuggestionRequest {
            pantry_items: pantry_items.to_vec(),
        };
        self.request(
            ApiRequest::post(format!("{API_PREFIX}/gemini/recipe-suggestions")).json(&body),
        )
        .await
    }

    /// `POST /api/v1/gemini/analyze-item`.
    pub async fn analyze_pantry_item(&self, item_name: &str) -> ApiResponse<ItemAnalysis> {
        let body = AnalyzeItemRequest {
            item_name: item_name.to_string(),
        };
        self.request(ApiRequest::post(format!("{API_PREFIX}/gemini/analyze-item")).json(&body))
            .await
    }

    /// `POST /api/v1/ai/custom-recipes`.
    pub async fn generate_custom_recipe(
        &self,
        request: &CustomRecipeRequest,
    ) -> ApiResponse<CustomRecipeResponse> {
        self.request(ApiRequest::post(format!("{API_PREFIX}/ai/custom-recipes")).json(request))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedHttpClient, json_response};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_suggestions_send_item_names() {
        let http = ScriptedHttpClient::new(vec![Ok(json_response(
            200,
            r#"[{"title":"Omelette","ingredients":["eggs","cheese"]}]"#,
        ))]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let items = vec!["eggs".to_string(), "cheese".to_string()];
        let suggestions = api
            .generate_recipe_suggestions(&items)
            .await
            .into_result()
            .unwrap();
        assert_eq!(suggestions[0].title, "Omelette");

        let sent = &http.requests()[0];
        assert_eq!(sent.url, "http://api.test/api/v1/gemini/recipe-suggestions");
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"pantry_items":["eggs","cheese"]}"#)
        );
    }

    #[tokio::test]
    async fn test_custom_recipe_omits_unset_preferences() {
        let http = ScriptedHttpClient::new(vec![Ok(json_response(503, ""))]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let request = CustomRecipeRequest {
            pantry_item_ids: vec![1, 2],
            max_calories: Some(600),
            ..CustomRecipeRequest::default()
        };
        let response = api.generate_custom_recipe(&request).await;
        assert_eq!(response.error_ref().unwrap().message, "HTTP 503");
        let sent: serde_json::Value =
            serde_json::from_str(http.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({"pantry_item_ids": [1, 2], "max_calories": 600})
        );
    }
}
