pub mod catalog;
pub mod error;
mod search_session;

pub use catalog::{HttpCatalog, ProductCatalog};
pub use error::SearchError;
pub use search_session::{Completion, SearchSession, SearchTicket};
