pub mod product;
pub mod row_prompt;
pub mod virtual_window;
pub mod wishlist;

pub use product::{Product, ProductRef, ResultSet};
pub use row_prompt::{PromptEvent, RowPrompt};
pub use virtual_window::{ScrollTracker, VirtualWindow};
pub use wishlist::Wishlist;
