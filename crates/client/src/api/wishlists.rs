//! `/wishlists` endpoints.

use urlencoding::encode;
use wishlist_shared::{
    ApiError, CreateWishlistRequest, InviteResponse, MessageResponse, UpdateWishlistRequest,
    Wishlist,
};

use crate::api_client::ApiClient;

pub const WISHLISTS_PATH: &str = "/wishlists";

pub(crate) fn wishlist_path(id: &str) -> String {
    format!("{WISHLISTS_PATH}/{}", encode(id))
}

pub(crate) fn join_path(code: &str) -> String {
    format!("{WISHLISTS_PATH}/join/{}", encode(code.trim()))
}

pub(crate) fn invite_path(id: &str) -> String {
    format!("{}/invite", wishlist_path(id))
}

impl ApiClient {
    /// Wishlists the user owns or collaborates on.
    pub async fn list_wishlists(&self) -> Result<Vec<Wishlist>, ApiError> {
        self.get_json(WISHLISTS_PATH).await
    }

    pub async fn get_wishlist(&self, id: &str) -> Result<Wishlist, ApiError> {
        self.get_json(&wishlist_path(id)).await
    }

    pub async fn create_wishlist(&self, req: &CreateWishlistRequest) -> Result<Wishlist, ApiError> {
        self.post_json(WISHLISTS_PATH, req).await
    }

    pub async fn update_wishlist(
        &self,
        id: &str,
        req: &UpdateWishlistRequest,
    ) -> Result<Wishlist, ApiError> {
        self.put_json(&wishlist_path(id), req).await
    }

    pub async fn delete_wishlist(&self, id: &str) -> Result<Option<MessageResponse>, ApiError> {
        self.delete_json(&wishlist_path(id)).await
    }

    /// Join a wishlist with an invite code. Returns the joined wishlist.
    pub async fn join_wishlist(&self, code: &str) -> Result<Wishlist, ApiError> {
        self.post_empty(&join_path(code)).await
    }

    /// Generate (or regenerate) the wishlist's invite code.
    pub async fn create_invite(&self, id: &str) -> Result<InviteResponse, ApiError> {
        self.post_empty(&invite_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_encode_identifiers() {
        assert_eq!(wishlist_path("65f0a1"), "/wishlists/65f0a1");
        assert_eq!(invite_path("65f0a1"), "/wishlists/65f0a1/invite");
    }

    #[test]
    fn join_path_trims_and_escapes_code() {
        assert_eq!(join_path("  AB12CD "), "/wishlists/join/AB12CD");
        assert_eq!(join_path("a/b c"), "/wishlists/join/a%2Fb%20c");
    }
}
