use dioxus::prelude::*;
use crate::ui_dioxus::views::SearchPage;

/// Root component. Expects an `AppConfig` and an `Arc<dyn ProductCatalog>`
/// in context, provided at launch.
#[component]
pub fn App() -> Element {
    rsx! {
        div {
            class: "app-container",
            style: "min-height: 100vh; background: #fafafa;",

            SearchPage {}
        }
    }
}
