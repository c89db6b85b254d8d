//! UI primitives (Button, Modal, form fields)

pub mod button;
pub mod field;
pub mod modal;

pub use button::*;
pub use field::*;
pub use modal::*;
