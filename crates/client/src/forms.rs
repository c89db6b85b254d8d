//! Form drafts.
//!
//! Inputs are kept as raw strings while the user types. A draft turns into
//! a request body only through its `to_*` method, which enforces the
//! required fields so an invalid form never reaches the network.

use thiserror::Error;
use wishlist_shared::{
    ensure_url_protocol, CreateWishlistRequest, LoginRequest, Priority, Product, ProductInput,
    ProductStatus, RegisterRequest, UpdateProfileRequest, UpdateWishlistRequest, User, Wishlist,
    DEFAULT_CURRENCY,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Price must be a non-negative number")]
    InvalidPrice,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

pub const MIN_PASSWORD_LEN: usize = 6;

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional_url(value: &str) -> Option<String> {
    optional(value).map(|v| ensure_url_protocol(&v))
}

/// Comma separated, trimmed, empty entries and repeats dropped.
pub fn parse_tags(value: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub currency: String,
    pub image_url: String,
    pub url: String,
    pub category: String,
    pub brand: String,
    pub tags: String,
    pub priority: Priority,
    pub status: ProductStatus,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            image_url: String::new(),
            url: String::new(),
            category: String::new(),
            brand: String::new(),
            tags: String::new(),
            priority: Priority::default(),
            status: ProductStatus::default(),
        }
    }
}

impl ProductDraft {
    /// Prefill for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.map(|p| p.to_string()).unwrap_or_default(),
            currency: product.currency.clone(),
            image_url: product.image_url.clone().unwrap_or_default(),
            url: product.url.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            brand: product.brand.clone().unwrap_or_default(),
            tags: product.tags.join(", "),
            priority: product.priority,
            status: product.status,
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.to_input().is_ok()
    }

    pub fn parsed_price(&self) -> Result<Option<f64>, DraftError> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.trim_start_matches(['$', '€', '£', '¥', '₹']).replace(',', "").parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
            _ => Err(DraftError::InvalidPrice),
        }
    }

    pub fn to_input(&self) -> Result<ProductInput, DraftError> {
        let name = optional(&self.name).ok_or(DraftError::Required("Name"))?;
        let price = self.parsed_price()?;
        let currency = optional(&self.currency)
            .map(|c| c.to_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(ProductInput {
            name,
            price,
            currency,
            image_url: optional_url(&self.image_url),
            url: optional_url(&self.url),
            category: optional(&self.category),
            brand: optional(&self.brand),
            tags: parse_tags(&self.tags),
            priority: self.priority,
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistDraft {
    pub title: String,
    pub description: String,
    pub is_public: bool,
}

impl WishlistDraft {
    pub fn from_wishlist(wishlist: &Wishlist) -> Self {
        Self {
            title: wishlist.title.clone(),
            description: wishlist.description.clone().unwrap_or_default(),
            is_public: wishlist.is_public,
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn to_create(&self) -> Result<CreateWishlistRequest, DraftError> {
        Ok(CreateWishlistRequest {
            title: optional(&self.title).ok_or(DraftError::Required("Title"))?,
            description: optional(&self.description),
            is_public: self.is_public,
        })
    }

    /// A cleared description is sent as an empty string so the server
    /// drops the old one.
    pub fn to_update(&self) -> Result<UpdateWishlistRequest, DraftError> {
        Ok(UpdateWishlistRequest {
            title: Some(optional(&self.title).ok_or(DraftError::Required("Title"))?),
            description: Some(self.description.trim().to_string()),
            is_public: Some(self.is_public),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn is_submittable(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn to_request(&self) -> Result<LoginRequest, DraftError> {
        let email = optional(&self.email).ok_or(DraftError::Required("Email"))?;
        if self.password.is_empty() {
            return Err(DraftError::Required("Password"));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterDraft {
    pub fn is_submittable(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    pub fn to_request(&self) -> Result<RegisterRequest, DraftError> {
        let username = optional(&self.username).ok_or(DraftError::Required("Username"))?;
        let email = optional(&self.email).ok_or(DraftError::Required("Email"))?;
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(DraftError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err(DraftError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            username,
            email,
            password: self.password.clone(),
        })
    }
}

/// Profile edits. `avatar: None` means the user removed their avatar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileDraft {
    pub username: String,
    pub avatar: Option<String>,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            avatar: user.avatar.clone().filter(|a| !a.is_empty()),
        }
    }

    pub fn is_dirty(&self, user: &User) -> bool {
        let original = Self::from_user(user);
        self.username.trim() != original.username || self.avatar != original.avatar
    }

    /// The avatar is always sent; an empty string clears it on the server.
    pub fn to_request(&self) -> Result<UpdateProfileRequest, DraftError> {
        let username = optional(&self.username).ok_or(DraftError::Required("Username"))?;
        Ok(UpdateProfileRequest {
            username: Some(username),
            avatar: Some(self.avatar.clone().unwrap_or_default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_without_name_is_not_submittable() {
        let draft = ProductDraft {
            name: "   ".into(),
            price: "12".into(),
            ..ProductDraft::default()
        };
        assert!(!draft.is_submittable());
        assert_eq!(draft.to_input(), Err(DraftError::Required("Name")));
    }

    #[test]
    fn product_input_is_normalized() {
        let draft = ProductDraft {
            name: " Desk lamp ".into(),
            price: "1,299.50".into(),
            currency: "eur".into(),
            url: "shop.example.com/lamp".into(),
            image_url: "http://img.example.com/l.png".into(),
            tags: "home, light, , Home".into(),
            ..ProductDraft::default()
        };

        let input = draft.to_input().unwrap();
        assert_eq!(input.name, "Desk lamp");
        assert_eq!(input.price, Some(1299.5));
        assert_eq!(input.currency, "EUR");
        assert_eq!(input.url.as_deref(), Some("https://shop.example.com/lamp"));
        assert_eq!(input.image_url.as_deref(), Some("http://img.example.com/l.png"));
        assert_eq!(input.tags, vec!["home".to_string(), "light".to_string()]);
        assert_eq!(input.category, None);
    }

    #[test]
    fn bad_price_is_rejected() {
        let mut draft = ProductDraft {
            name: "Mug".into(),
            price: "cheap".into(),
            ..ProductDraft::default()
        };
        assert_eq!(draft.to_input(), Err(DraftError::InvalidPrice));
        draft.price = "-3".into();
        assert_eq!(draft.parsed_price(), Err(DraftError::InvalidPrice));
        draft.price = String::new();
        assert_eq!(draft.parsed_price(), Ok(None));
    }

    #[test]
    fn blank_currency_falls_back_to_default() {
        let draft = ProductDraft {
            name: "Mug".into(),
            currency: " ".into(),
            ..ProductDraft::default()
        };
        assert_eq!(draft.to_input().unwrap().currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn wishlist_title_is_required() {
        let draft = WishlistDraft::default();
        assert!(!draft.is_submittable());
        assert_eq!(draft.to_create(), Err(DraftError::Required("Title")));

        let draft = WishlistDraft {
            title: "Birthday".into(),
            description: "  ".into(),
            is_public: true,
        };
        let request = draft.to_create().unwrap();
        assert_eq!(request.description, None);
        assert!(request.is_public);
        assert_eq!(draft.to_update().unwrap().description.as_deref(), Some(""));
    }

    #[test]
    fn login_needs_email_and_password() {
        let mut draft = LoginDraft {
            email: "ana@example.com".into(),
            password: String::new(),
        };
        assert!(!draft.is_submittable());
        draft.password = "secret".into();
        assert!(draft.is_submittable());
        assert_eq!(draft.to_request().unwrap().email, "ana@example.com");
    }

    #[test]
    fn register_checks_password_rules() {
        let mut draft = RegisterDraft {
            username: "ana".into(),
            email: "ana@example.com".into(),
            password: "abc".into(),
            confirm_password: "abc".into(),
        };
        assert_eq!(draft.to_request(), Err(DraftError::PasswordTooShort(6)));

        draft.password = "abcdef".into();
        assert_eq!(draft.to_request(), Err(DraftError::PasswordMismatch));

        draft.confirm_password = "abcdef".into();
        assert_eq!(draft.to_request().unwrap().username, "ana");
    }

    fn ana() -> User {
        User {
            id: "u1".into(),
            username: "ana".into(),
            email: None,
            avatar: Some("https://cdn.example.com/ana.png".into()),
        }
    }

    #[test]
    fn removing_avatar_sends_an_empty_avatar() {
        let mut draft = ProfileDraft::from_user(&ana());
        assert!(!draft.is_dirty(&ana()));

        draft.avatar = None;
        assert!(draft.is_dirty(&ana()));
        let body = serde_json::to_value(draft.to_request().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "username": "ana", "avatar": "" }));
    }

    #[test]
    fn profile_keeps_new_avatar_and_needs_username() {
        let mut draft = ProfileDraft::from_user(&ana());
        draft.avatar = Some("https://cdn.example.com/new.png".into());
        assert_eq!(
            draft.to_request().unwrap().avatar.as_deref(),
            Some("https://cdn.example.com/new.png")
        );

        draft.username = "  ".into();
        assert_eq!(draft.to_request(), Err(DraftError::Required("Username")));
    }
}
