pub mod result_list;
pub mod result_row;
pub mod wishlist_confirmation;

pub use result_list::ResultList;
pub use result_row::ResultRow;
pub use wishlist_confirmation::WishlistConfirmation;
