//! Dashboard wishlist collection.

use wishlist_shared::Wishlist;

/// Put a created or joined wishlist at the front, replacing any stale copy.
pub fn upsert_front(wishlists: &mut Vec<Wishlist>, wishlist: Wishlist) {
    wishlists.retain(|w| w.id != wishlist.id);
    wishlists.insert(0, wishlist);
}

/// Swap in an edited wishlist. Returns `false` if it is not in the list.
pub fn replace(wishlists: &mut [Wishlist], wishlist: Wishlist) -> bool {
    match wishlists.iter_mut().find(|w| w.id == wishlist.id) {
        Some(existing) => {
            *existing = wishlist;
            true
        }
        None => false,
    }
}

pub fn remove(wishlists: &mut Vec<Wishlist>, wishlist_id: &str) -> bool {
    let before = wishlists.len();
    wishlists.retain(|w| w.id != wishlist_id);
    wishlists.len() != before
}

/// Wishlists split into (owned, shared with the user).
pub fn partition_by_owner<'a>(
    wishlists: &'a [Wishlist],
    user_id: &str,
) -> (Vec<&'a Wishlist>, Vec<&'a Wishlist>) {
    wishlists.iter().partition(|w| w.is_owner(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_shared::User;

    fn wishlist(id: &str, owner: &str) -> Wishlist {
        Wishlist {
            id: id.to_string(),
            title: format!("List {id}"),
            description: None,
            is_public: false,
            owner: User {
                id: owner.to_string(),
                username: owner.to_string(),
                email: None,
                avatar: None,
            },
            collaborators: Vec::new(),
            invite_code: None,
            product_count: 0,
            total_value: 0.0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn upsert_moves_existing_to_front() {
        let mut lists = vec![wishlist("a", "u1"), wishlist("b", "u1")];
        let mut renamed = wishlist("b", "u1");
        renamed.title = "Birthday".into();
        upsert_front(&mut lists, renamed);

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].title, "Birthday");
    }

    #[test]
    fn replace_and_remove_by_id() {
        let mut lists = vec![wishlist("a", "u1")];
        assert!(!replace(&mut lists, wishlist("z", "u1")));
        assert!(remove(&mut lists, "a"));
        assert!(!remove(&mut lists, "a"));
        assert!(lists.is_empty());
    }

    #[test]
    fn partitions_owned_and_shared() {
        let lists = vec![wishlist("a", "u1"), wishlist("b", "u2"), wishlist("c", "u1")];
        let (owned, shared) = partition_by_owner(&lists, "u1");
        assert_eq!(owned.len(), 2);
        assert_eq!(shared[0].id, "b");
    }
}
