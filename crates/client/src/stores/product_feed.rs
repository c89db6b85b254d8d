//! Product list of one wishlist page.
//!
//! The list is loaded over REST and then patched in place by room events
//! and by the page's own mutations. Every splice is idempotent: an add for
//! a product already present replaces it instead of duplicating it, and
//! updates or deletes of unknown ids are ignored.

use std::collections::BTreeMap;

use wishlist_shared::{format_currency, Comment, Product, Reaction, ServerEvent, DEFAULT_CURRENCY};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFeed {
    wishlist_id: String,
    products: Vec<Product>,
}

impl ProductFeed {
    pub fn new(wishlist_id: impl Into<String>) -> Self {
        Self {
            wishlist_id: wishlist_id.into(),
            products: Vec::new(),
        }
    }

    pub fn wishlist_id(&self) -> &str {
        &self.wishlist_id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of known prices per currency code, ordered by code.
    pub fn totals_by_currency(&self) -> Vec<(String, f64)> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for product in &self.products {
            let Some(price) = product.price else {
                continue;
            };
            let code = match product.currency.trim() {
                "" => DEFAULT_CURRENCY.to_string(),
                code => code.to_uppercase(),
            };
            *totals.entry(code).or_default() += price;
        }
        totals.into_iter().collect()
    }

    /// Header total, one formatted amount per currency (`$10.00 + ¥10,000`).
    pub fn total_label(&self) -> String {
        let totals = self.totals_by_currency();
        if totals.is_empty() {
            return format_currency(0.0, DEFAULT_CURRENCY);
        }
        totals
            .iter()
            .map(|(code, amount)| format_currency(*amount, code))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Full reload from the server.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Apply a room event. Events for other wishlists are ignored.
    /// Returns whether the list changed.
    pub fn apply(&mut self, event: &ServerEvent) -> bool {
        if event.wishlist_id() != self.wishlist_id {
            return false;
        }
        match event {
            ServerEvent::ProductAdded(p) => self.insert(p.product.clone()),
            ServerEvent::ProductUpdated(p) => self.replace(p.product.clone()),
            ServerEvent::ProductDeleted(p) => self.remove(&p.product_id),
            ServerEvent::CommentAdded(p) => self.add_comment(&p.product_id, p.comment.clone()),
            ServerEvent::ReactionAdded(p) => self.set_reactions(&p.product_id, p.reactions.clone()),
        }
    }

    /// Newest first. A product already in the list is replaced in place.
    pub fn insert(&mut self, product: Product) -> bool {
        if self.products.iter().any(|p| p.id == product.id) {
            return self.replace(product);
        }
        self.products.insert(0, product);
        true
    }

    pub fn replace(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) if *existing != product => {
                *existing = product;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        self.products.len() != before
    }

    pub fn add_comment(&mut self, product_id: &str, comment: Comment) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) else {
            return false;
        };
        if product.comments.iter().any(|c| c.id == comment.id) {
            return false;
        }
        product.comments.push(comment);
        true
    }

    pub fn set_reactions(&mut self, product_id: &str, reactions: Vec<Reaction>) -> bool {
        match self.products.iter_mut().find(|p| p.id == product_id) {
            Some(product) if product.reactions != reactions => {
                product.reactions = reactions;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wishlist_shared::{
        CommentPayload, Priority, ProductDeletedPayload, ProductPayload, ProductStatus,
        ReactionPayload, User, DEFAULT_CURRENCY,
    };

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("user-{id}"),
            email: None,
            avatar: None,
        }
    }

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            wishlist: "w1".to_string(),
            name: name.to_string(),
            price: Some(10.0),
            currency: DEFAULT_CURRENCY.to_string(),
            image_url: None,
            url: None,
            category: None,
            brand: None,
            tags: Vec::new(),
            priority: Priority::Medium,
            status: ProductStatus::Wanted,
            comments: Vec::new(),
            reactions: Vec::new(),
            added_by: user("u1"),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn comment(id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            user: user("u2"),
            content: "love it".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    fn added(wishlist_id: &str, product: Product) -> ServerEvent {
        ServerEvent::ProductAdded(ProductPayload {
            wishlist_id: wishlist_id.to_string(),
            product,
        })
    }

    fn feed() -> ProductFeed {
        let mut feed = ProductFeed::new("w1");
        feed.replace_all(vec![product("p1", "Lamp"), product("p2", "Mug")]);
        feed
    }

    #[test]
    fn added_product_is_prepended_once() {
        let mut feed = feed();
        let event = added("w1", product("p3", "Book"));

        assert!(feed.apply(&event));
        assert!(!feed.apply(&event));
        let ids: Vec<_> = feed.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn events_for_other_wishlists_are_ignored() {
        let mut feed = feed();
        assert!(!feed.apply(&added("w2", product("p3", "Book"))));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn updated_product_replaces_by_id() {
        let mut feed = feed();
        let event = ServerEvent::ProductUpdated(ProductPayload {
            wishlist_id: "w1".into(),
            product: product("p2", "Big mug"),
        });

        assert!(feed.apply(&event));
        assert_eq!(feed.get("p2").map(|p| p.name.as_str()), Some("Big mug"));
        assert_eq!(feed.products()[1].id, "p2");
        assert!(!feed.apply(&event));
    }

    #[test]
    fn update_for_unknown_product_is_ignored() {
        let mut feed = feed();
        assert!(!feed.replace(product("p9", "Ghost")));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn deleted_product_is_removed_once() {
        let mut feed = feed();
        let event = ServerEvent::ProductDeleted(ProductDeletedPayload {
            wishlist_id: "w1".into(),
            product_id: "p1".into(),
        });

        assert!(feed.apply(&event));
        assert!(!feed.apply(&event));
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn comment_is_appended_without_duplicates() {
        let mut feed = feed();
        let event = ServerEvent::CommentAdded(CommentPayload {
            wishlist_id: "w1".into(),
            product_id: "p1".into(),
            comment: comment("c1"),
        });

        assert!(feed.apply(&event));
        assert!(!feed.apply(&event));
        assert_eq!(feed.get("p1").map(|p| p.comments.len()), Some(1));
    }

    #[test]
    fn reactions_are_replaced_wholesale() {
        let mut feed = feed();
        let reactions = vec![Reaction {
            user: user("u2"),
            emoji: "🎁".to_string(),
            created_at: None,
        }];
        let event = ServerEvent::ReactionAdded(ReactionPayload {
            wishlist_id: "w1".into(),
            product_id: "p2".into(),
            reactions: reactions.clone(),
        });

        assert!(feed.apply(&event));
        assert_eq!(feed.get("p2").map(|p| p.reactions.clone()), Some(reactions));
        assert!(feed.set_reactions("p2", Vec::new()));
    }

    #[test]
    fn totals_skip_unpriced_products() {
        let mut feed = feed();
        let mut free = product("p3", "Hug");
        free.price = None;
        feed.insert(free);
        assert_eq!(feed.totals_by_currency(), vec![("USD".to_string(), 20.0)]);
        assert_eq!(feed.total_label(), "$20.00");
    }

    #[test]
    fn totals_are_kept_apart_per_currency() {
        let mut feed = ProductFeed::new("w1");
        let mut yen = product("p1", "Tea set");
        yen.price = Some(10_000.0);
        yen.currency = "JPY".to_string();
        feed.replace_all(vec![yen, product("p2", "Mug")]);

        assert_eq!(
            feed.totals_by_currency(),
            vec![("JPY".to_string(), 10_000.0), ("USD".to_string(), 10.0)]
        );
        assert_eq!(feed.total_label(), "¥10,000 + $10.00");
    }

    #[test]
    fn empty_feed_totals_zero() {
        assert_eq!(ProductFeed::new("w1").total_label(), "$0.00");
    }
}
