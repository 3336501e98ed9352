//! Recommendation endpoint

use planeats_domain::models::{RecipeRecommendationsResponse, RecommendationParams};
use planeats_domain::{ApiRequest, ApiResponse};

use super::{API_PREFIX, ApiClient};

impl ApiClient {
    /// `GET /api/v1/recommendations`, ranked against the caller's pantry.
    pub async fn recommendations(
        &self,
        params: &RecommendationParams,
    ) -> ApiResponse<RecipeRecommendationsResponse> {
        let endpoint = params
            .to_params()
            .append_to(&format!("{API_PREFIX}/recommendations"));
        self.request(ApiRequest::get(endpoint)).await
    }
}
