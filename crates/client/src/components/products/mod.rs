//! Product cards, their comments and reactions, and the add/edit form.

pub mod comment_section;
pub mod product_card;
pub mod product_form_modal;
pub mod reaction_bar;

pub use comment_section::CommentSection;
pub use product_card::ProductCard;
pub use product_form_modal::ProductFormModal;
pub use reaction_bar::{ReactionBar, REACTION_EMOJIS};
