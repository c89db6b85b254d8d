//! `/products` endpoints.

use urlencoding::encode;
use wishlist_shared::{
    AddCommentRequest, AddReactionRequest, ApiError, Comment, MessageResponse, Product,
    ProductInput, Reaction,
};

use crate::api_client::ApiClient;

pub(crate) fn wishlist_products_path(wishlist_id: &str) -> String {
    format!("/products/wishlist/{}", encode(wishlist_id))
}

pub(crate) fn product_path(id: &str) -> String {
    format!("/products/{}", encode(id))
}

pub(crate) fn comments_path(product_id: &str) -> String {
    format!("{}/comments", product_path(product_id))
}

pub(crate) fn reactions_path(product_id: &str) -> String {
    format!("{}/reactions", product_path(product_id))
}

impl ApiClient {
    pub async fn list_products(&self, wishlist_id: &str) -> Result<Vec<Product>, ApiError> {
        self.get_json(&wishlist_products_path(wishlist_id)).await
    }

    pub async fn create_product(
        &self,
        wishlist_id: &str,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.post_json(&wishlist_products_path(wishlist_id), input).await
    }

    pub async fn update_product(&self, id: &str, input: &ProductInput) -> Result<Product, ApiError> {
        self.put_json(&product_path(id), input).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<Option<MessageResponse>, ApiError> {
        self.delete_json(&product_path(id)).await
    }

    /// Returns the stored comment.
    pub async fn add_comment(&self, product_id: &str, content: &str) -> Result<Comment, ApiError> {
        let req = AddCommentRequest {
            content: content.to_string(),
        };
        self.post_json(&comments_path(product_id), &req).await
    }

    /// Set, change or toggle off the user's reaction. Returns the product's
    /// full reaction list afterwards.
    pub async fn react(&self, product_id: &str, emoji: &str) -> Result<Vec<Reaction>, ApiError> {
        let req = AddReactionRequest {
            emoji: emoji.to_string(),
        };
        self.post_json(&reactions_path(product_id), &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_paths() {
        assert_eq!(wishlist_products_path("w1"), "/products/wishlist/w1");
        assert_eq!(product_path("p1"), "/products/p1");
        assert_eq!(comments_path("p1"), "/products/p1/comments");
        assert_eq!(reactions_path("p1"), "/products/p1/reactions");
    }
}
