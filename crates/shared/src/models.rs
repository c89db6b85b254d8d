//! Shared data models exchanged with the wishlist backend.
//!
//! Records mirror the backend's JSON verbatim: camelCase field names and
//! document identifiers under `_id` (plain `id` is accepted too).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Identity ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// One or two uppercase letters used when no avatar image is set.
    pub fn initials(&self) -> String {
        let mut parts = self
            .username
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-' || c == '.')
            .filter(|p| !p.is_empty());

        let first = parts.next().and_then(|p| p.chars().next());
        let second = parts.next().and_then(|p| p.chars().next());

        match (first, second) {
            (Some(a), Some(b)) => format!("{a}{b}").to_uppercase(),
            (Some(a), None) => a.to_uppercase().to_string(),
            _ => "?".to_string(),
        }
    }
}

// --- Wishlists ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum CollaboratorRole {
    Owner,
    #[default]
    Editor,
    Viewer,
}

impl CollaboratorRole {
    pub fn label(self) -> &'static str {
        match self {
            CollaboratorRole::Owner => "Owner",
            CollaboratorRole::Editor => "Editor",
            CollaboratorRole::Viewer => "Viewer",
        }
    }

    pub fn can_edit(self) -> bool {
        matches!(self, CollaboratorRole::Owner | CollaboratorRole::Editor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub user: User,
    #[serde(default)]
    pub role: CollaboratorRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub owner: User,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub invite_code: Option<String>,
    /// Server-computed aggregate.
    #[serde(default)]
    pub product_count: u32,
    /// Server-computed aggregate, in the wishlist owner's display currency.
    #[serde(default)]
    pub total_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Wishlist {
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner.id == user_id
    }

    /// Role of a user on this wishlist, `None` if they are neither owner
    /// nor collaborator.
    pub fn role_of(&self, user_id: &str) -> Option<CollaboratorRole> {
        if self.is_owner(user_id) {
            return Some(CollaboratorRole::Owner);
        }
        self.collaborators
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.role)
    }

    pub fn can_edit(&self, user_id: &str) -> bool {
        self.role_of(user_id).is_some_and(CollaboratorRole::can_edit)
    }

    /// Owner followed by collaborators, without duplicates.
    pub fn members(&self) -> Vec<&User> {
        let mut members = vec![&self.owner];
        for c in &self.collaborators {
            if !members.iter().any(|m| m.id == c.user.id) {
                members.push(&c.user);
            }
        }
        members
    }
}

// --- Products ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProductStatus {
    #[default]
    Wanted,
    Reserved,
    Purchased,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Wanted,
        ProductStatus::Reserved,
        ProductStatus::Purchased,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Wanted => "wanted",
            ProductStatus::Reserved => "reserved",
            ProductStatus::Purchased => "purchased",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Wanted => "Wanted",
            ProductStatus::Reserved => "Reserved",
            ProductStatus::Purchased => "Purchased",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user: User,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub user: User,
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Aggregated count of one emoji on a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: usize,
    /// Whether the viewing user is one of the reactors.
    pub mine: bool,
}

pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub wishlist: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    pub added_by: User,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The emoji a user reacted with, if any.
    pub fn reaction_of(&self, user_id: &str) -> Option<&str> {
        self.reactions
            .iter()
            .find(|r| r.user.id == user_id)
            .map(|r| r.emoji.as_str())
    }

    /// Reaction counts grouped by emoji, in order of first appearance.
    pub fn reaction_counts(&self, viewer_id: Option<&str>) -> Vec<ReactionCount> {
        let mut counts: Vec<ReactionCount> = Vec::new();
        for reaction in &self.reactions {
            let mine = viewer_id == Some(reaction.user.id.as_str());
            match counts.iter_mut().find(|c| c.emoji == reaction.emoji) {
                Some(entry) => {
                    entry.count += 1;
                    entry.mine |= mine;
                }
                None => counts.push(ReactionCount {
                    emoji: reaction.emoji.clone(),
                    count: 1,
                    mine,
                }),
            }
        }
        counts
    }
}

// --- API Requests ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWishlistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    pub invite_code: String,
}

/// Product fields sent on create (`POST`) and full update (`PUT`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub tags: Vec<String>,
    pub priority: Priority,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddReactionRequest {
    pub emoji: String,
}

// --- API Responses ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatus {
    pub configured: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            username: name.to_string(),
            email: None,
            avatar: None,
        }
    }

    fn reaction(user_id: &str, emoji: &str) -> Reaction {
        Reaction {
            user: user(user_id, user_id),
            emoji: emoji.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn product_decodes_backend_document() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "wishlist": "w1",
            "name": "Headphones",
            "price": 199.99,
            "imageUrl": "https://cdn.example.com/h.png",
            "tags": ["audio"],
            "priority": "high",
            "addedBy": { "_id": "u1", "username": "ana" },
            "createdAt": "2026-01-05T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.currency, "USD");
        assert_eq!(product.priority, Priority::High);
        assert_eq!(product.status, ProductStatus::Wanted);
        assert!(product.comments.is_empty());
        assert_eq!(product.added_by.username, "ana");
    }

    #[test]
    fn user_accepts_plain_id_alias() {
        let u: User = serde_json::from_value(json!({ "id": "u9", "username": "bo" })).unwrap();
        assert_eq!(u.id, "u9");
        let encoded = serde_json::to_value(&u).unwrap();
        assert_eq!(encoded["_id"], "u9");
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(user("1", "jane doe").initials(), "JD");
        assert_eq!(user("1", "max_power").initials(), "MP");
        assert_eq!(user("1", "solo").initials(), "S");
        assert_eq!(user("1", "").initials(), "?");
    }

    #[test]
    fn wishlist_roles_resolve_owner_and_collaborators() {
        let wishlist = Wishlist {
            id: "w1".into(),
            title: "Birthday".into(),
            description: None,
            is_public: false,
            owner: user("o", "owner"),
            collaborators: vec![
                Collaborator {
                    user: user("e", "editor"),
                    role: CollaboratorRole::Editor,
                    joined_at: None,
                },
                Collaborator {
                    user: user("v", "viewer"),
                    role: CollaboratorRole::Viewer,
                    joined_at: None,
                },
            ],
            invite_code: None,
            product_count: 0,
            total_value: 0.0,
            created_at: None,
            updated_at: None,
        };

        assert_eq!(wishlist.role_of("o"), Some(CollaboratorRole::Owner));
        assert!(wishlist.can_edit("e"));
        assert!(!wishlist.can_edit("v"));
        assert!(!wishlist.can_edit("stranger"));
        assert_eq!(wishlist.members().len(), 3);
    }

    #[test]
    fn reaction_counts_group_by_emoji_and_flag_viewer() {
        let product = Product {
            id: "p".into(),
            wishlist: "w".into(),
            name: "Lamp".into(),
            price: None,
            currency: DEFAULT_CURRENCY.into(),
            image_url: None,
            url: None,
            category: None,
            brand: None,
            tags: vec![],
            priority: Priority::Low,
            status: ProductStatus::Wanted,
            comments: vec![],
            reactions: vec![reaction("a", "🔥"), reaction("b", "❤️"), reaction("c", "🔥")],
            added_by: user("a", "a"),
            created_at: Utc::now(),
        };

        let counts = product.reaction_counts(Some("c"));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].emoji, "🔥");
        assert_eq!(counts[0].count, 2);
        assert!(counts[0].mine);
        assert!(!counts[1].mine);
        assert_eq!(product.reaction_of("b"), Some("❤️"));
    }

    #[test]
    fn priority_and_status_parse_their_wire_names() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(ProductStatus::parse("purchased"), Some(ProductStatus::Purchased));
        assert_eq!(Priority::parse("urgent"), None);
    }
}
