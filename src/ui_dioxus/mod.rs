// Dioxus UI module - search page, virtualized result list and wishlist prompt
pub mod app;
pub mod components;
pub mod render_stats;
pub mod views;

pub use app::App;
pub use render_stats::RenderStats;
