//! `/auth` endpoints.

use wishlist_shared::{ApiError, AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, User};

use crate::api_client::ApiClient;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const ME_PATH: &str = "/auth/me";
pub const PROFILE_PATH: &str = "/auth/profile";

impl ApiClient {
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(REGISTER_PATH, req).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(LOGIN_PATH, req).await
    }

    /// The user the current token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json(ME_PATH).await
    }

    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<User, ApiError> {
        self.put_json(PROFILE_PATH, req).await
    }
}
