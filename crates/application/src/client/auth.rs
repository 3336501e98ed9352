//! Authentication endpoints

use planeats_domain::models::{LoginResponse, RegisterRequest, UserRead};
use planeats_domain::{ApiRequest, ApiResponse, Credentials};

use super::{API_PREFIX, ApiClient};

impl ApiClient {
    /// `POST /api/v1/auth/login`. Public.
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<LoginResponse> {
        let credentials = Credentials::new(email, password);
        self.request(
            ApiRequest::post(format!("{API_PREFIX}/auth/login"))
                .json(&credentials)
                .public(),
        )
        .await
    }

    /// `POST /api/v1/auth/register`. Public.
    pub async fn register(&self, user: &RegisterRequest) -> ApiResponse<UserRead> {
        self.request(
            ApiRequest::post(format!("{API_PREFIX}/auth/register"))
                .json(user)
                .public(),
        )
        .await
    }

    /// `GET /api/v1/auth/me`.
    pub async fn current_user(&self) -> ApiResponse<UserRead> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/auth/me")))
            .await
    }
}
