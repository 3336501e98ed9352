//! User preference endpoints

use planeats_domain::models::{PreferenceOptions, UserPreferences, UserPreferencesUpdate};
use planeats_domain::{ApiRequest, ApiResponse};

use super::{API_PREFIX, ApiClient};

impl ApiClient {
    /// `GET /api/v1/user/preferences`. The backend creates defaults on first read.
    pub async fn user_preferences(&self) -> ApiResponse<UserPreferences> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/user/preferences")))
            .await
    }

    /// `PUT /api/v1/user/preferences`.
    pub async fn update_user_preferences(
        &self,
        update: &UserPreferencesUpdate,
    ) -> ApiResponse<UserPreferences> {
        self.request(ApiRequest::put(format!("{API_PREFIX}/user/preferences")).json(update))
            .await
    }

    /// `GET /api/v1/user/preferences/options`. Public.
    pub async fn preference_options(&self) -> ApiResponse<PreferenceOptions> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/user/preferences/options")).public())
            .await
    }
}
