use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::Wishlist;
use crate::services::{Completion, ProductCatalog, SearchSession};
use crate::ui_dioxus::components::ResultList;

#[component]
pub fn SearchPage() -> Element {
    let catalog = use_context::<Arc<dyn ProductCatalog>>();

    // State
    let mut query = use_signal(String::new);
    let mut session = use_signal(SearchSession::new);
    let mut wishlist = use_signal(Wishlist::new);

    // Created once so typing never hands the rows a new handler
    let add_to_wishlist = use_hook(|| {
        EventHandler::new(move |id: u64| {
            if wishlist.write().add(id) {
                info!(id, "Added product to wishlist");
            } else {
                debug!(id, "Product already in wishlist");
            }
        })
    });

    let submit = move |_: FormEvent| {
        let Some(ticket) = session.write().begin(&query.read()) else {
            return;
        };

        let catalog = catalog.clone();
        spawn(async move {
            let outcome = ticket.run(catalog.as_ref()).await;
            if session.write().complete(ticket, outcome) == Completion::Stale {
                debug!("Search superseded by a newer request");
            }
        });
    };

    let results = session.read().results().clone();
    let searching = session.read().is_searching();
    let error_message = session.read().last_error().unwrap_or_default().to_string();
    let wishlist_count = wishlist.read().len();

    rsx! {
        div {
            class: "search-page",
            style: "padding: 20px; max-width: 900px; margin: 0 auto; font-family: sans-serif;",

            h1 { "Search" }

            form {
                style: "display: flex; gap: 10px; margin-bottom: 16px;",
                prevent_default: "onsubmit",
                onsubmit: submit,

                input {
                    r#type: "text",
                    placeholder: "Search products...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    style: "flex: 1; padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                }

                button {
                    r#type: "submit",
                    style: "padding: 8px 16px; background: #3b82f6; color: white; border: none;
                           border-radius: 4px; cursor: pointer;",
                    "Search"
                }
            }

            div {
                class: "search-status",
                style: "display: flex; gap: 15px; margin-bottom: 12px; color: #666;",

                span { class: "wishlist-count", "Wishlist: {wishlist_count}" }

                if searching {
                    span { "Searching..." }
                }
            }

            if !error_message.is_empty() {
                div {
                    class: "search-error",
                    style: "padding: 8px; margin-bottom: 12px; background: #fee2e2; color: #991b1b;
                           border-radius: 4px;",
                    "{error_message}"
                }
            }

            ResultList {
                results: results,
                on_add_to_wishlist: add_to_wishlist,
            }
        }
    }
}
