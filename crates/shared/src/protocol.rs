//! Socket channel protocol.
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<name>", "data": <payload>}`. Clients join a room per
//! wishlist and relay their own mutations; the server forwards product,
//! comment and reaction events to the other members of the room.

use serde::{Deserialize, Serialize};

use crate::models::{Comment, Product, Reaction};

pub const EVENT_JOIN_WISHLIST: &str = "join-wishlist";
pub const EVENT_LEAVE_WISHLIST: &str = "leave-wishlist";
pub const EVENT_PRODUCT_ADDED: &str = "product-added";
pub const EVENT_PRODUCT_UPDATED: &str = "product-updated";
pub const EVENT_PRODUCT_DELETED: &str = "product-deleted";
pub const EVENT_COMMENT_ADDED: &str = "comment-added";
pub const EVENT_REACTION_ADDED: &str = "reaction-added";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub wishlist_id: String,
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDeletedPayload {
    pub wishlist_id: String,
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub wishlist_id: String,
    pub product_id: String,
    pub comment: Comment,
}

/// Carries the product's full reaction list after the change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPayload {
    pub wishlist_id: String,
    pub product_id: String,
    pub reactions: Vec<Reaction>,
}

/// Events sent from the client to the socket server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    #[serde(rename = "join-wishlist")]
    JoinWishlist(String),
    #[serde(rename = "leave-wishlist")]
    LeaveWishlist(String),
    #[serde(rename = "product-added")]
    ProductAdded(ProductPayload),
    #[serde(rename = "product-updated")]
    ProductUpdated(ProductPayload),
    #[serde(rename = "product-deleted")]
    ProductDeleted(ProductDeletedPayload),
    #[serde(rename = "comment-added")]
    CommentAdded(CommentPayload),
    #[serde(rename = "reaction-added")]
    ReactionAdded(ReactionPayload),
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::JoinWishlist(_) => EVENT_JOIN_WISHLIST,
            ClientEvent::LeaveWishlist(_) => EVENT_LEAVE_WISHLIST,
            ClientEvent::ProductAdded(_) => EVENT_PRODUCT_ADDED,
            ClientEvent::ProductUpdated(_) => EVENT_PRODUCT_UPDATED,
            ClientEvent::ProductDeleted(_) => EVENT_PRODUCT_DELETED,
            ClientEvent::CommentAdded(_) => EVENT_COMMENT_ADDED,
            ClientEvent::ReactionAdded(_) => EVENT_REACTION_ADDED,
        }
    }

    pub fn wishlist_id(&self) -> &str {
        match self {
            ClientEvent::JoinWishlist(id) | ClientEvent::LeaveWishlist(id) => id,
            ClientEvent::ProductAdded(p) | ClientEvent::ProductUpdated(p) => &p.wishlist_id,
            ClientEvent::ProductDeleted(p) => &p.wishlist_id,
            ClientEvent::CommentAdded(p) => &p.wishlist_id,
            ClientEvent::ReactionAdded(p) => &p.wishlist_id,
        }
    }

    /// Encode as a text frame.
    pub fn to_frame(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Events relayed by the socket server to the other members of a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "product-added")]
    ProductAdded(ProductPayload),
    #[serde(rename = "product-updated")]
    ProductUpdated(ProductPayload),
    #[serde(rename = "product-deleted")]
    ProductDeleted(ProductDeletedPayload),
    #[serde(rename = "comment-added")]
    CommentAdded(CommentPayload),
    #[serde(rename = "reaction-added")]
    ReactionAdded(ReactionPayload),
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::ProductAdded(_) => EVENT_PRODUCT_ADDED,
            ServerEvent::ProductUpdated(_) => EVENT_PRODUCT_UPDATED,
            ServerEvent::ProductDeleted(_) => EVENT_PRODUCT_DELETED,
            ServerEvent::CommentAdded(_) => EVENT_COMMENT_ADDED,
            ServerEvent::ReactionAdded(_) => EVENT_REACTION_ADDED,
        }
    }

    pub fn wishlist_id(&self) -> &str {
        match self {
            ServerEvent::ProductAdded(p) | ServerEvent::ProductUpdated(p) => &p.wishlist_id,
            ServerEvent::ProductDeleted(p) => &p.wishlist_id,
            ServerEvent::CommentAdded(p) => &p.wishlist_id,
            ServerEvent::ReactionAdded(p) => &p.wishlist_id,
        }
    }

    /// Decode a text frame.
    pub fn from_frame(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_frame_carries_bare_wishlist_id() {
        let frame = ClientEvent::JoinWishlist("w42".to_string()).to_frame().unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value, json!({ "event": "join-wishlist", "data": "w42" }));
    }

    #[test]
    fn deleted_frame_uses_camel_case_payload() {
        let event = ClientEvent::ProductDeleted(ProductDeletedPayload {
            wishlist_id: "w1".into(),
            product_id: "p1".into(),
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({ "event": "product-deleted", "data": { "wishlistId": "w1", "productId": "p1" } })
        );
        assert_eq!(event.name(), EVENT_PRODUCT_DELETED);
    }

    #[test]
    fn server_frame_decodes_comment_event() {
        let text = r#"{
            "event": "comment-added",
            "data": {
                "wishlistId": "w1",
                "productId": "p1",
                "comment": {
                    "_id": "c1",
                    "user": { "_id": "u2", "username": "kim" },
                    "content": "Great pick",
                    "createdAt": "2026-02-01T08:30:00Z"
                }
            }
        }"#;

        let event = ServerEvent::from_frame(text).unwrap();
        assert_eq!(event.wishlist_id(), "w1");
        match event {
            ServerEvent::CommentAdded(p) => assert_eq!(p.comment.content, "Great pick"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn server_frame_rejects_client_only_events() {
        assert!(ServerEvent::from_frame(r#"{"event":"join-wishlist","data":"w1"}"#).is_err());
    }
}
