use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{info, trace};

use crate::domain::{ProductRef, PromptEvent, RowPrompt};
use crate::ui_dioxus::components::WishlistConfirmation;
use crate::ui_dioxus::render_stats::RenderStats;

/// One search hit with its own inline wishlist prompt.
///
/// Props compare by product identity, so the row only re-renders when it is
/// handed a different product allocation.
#[component]
pub fn ResultRow(product: ProductRef, on_add_to_wishlist: EventHandler<u64>) -> Element {
    let mut prompt = use_signal(RowPrompt::default);
    let _mounted = use_hook(|| try_consume_context::<RenderStats>().map(|stats| Rc::new(stats.track_mount())));

    if let Some(stats) = try_consume_context::<RenderStats>() {
        stats.record_row_render(product.id);
    }
    trace!(id = product.id, "Rendering result row");

    let id = product.id;
    let mut send = move |event: PromptEvent| {
        let (next, add) = prompt().apply(event);
        prompt.set(next);
        if add {
            info!(id, "Wishlist add confirmed");
            on_add_to_wishlist.call(id);
        }
    };

    rsx! {
        div {
            class: "result-row",
            style: "display: flex; align-items: center; height: 100%; padding: 0 8px;
                   border-bottom: 1px solid #eee; white-space: nowrap;",

            span { "{product.title} - " }
            strong { "{product.price}" }

            button {
                style: "margin-left: 10px; padding: 2px 8px; border: 1px solid #ddd;
                       background: #f5f5f5; border-radius: 4px; cursor: pointer;",
                onclick: move |_| send(PromptEvent::Request),
                "Add to wishlist?"
            }

            if prompt().is_confirming() {
                WishlistConfirmation {
                    on_confirm: move |_| send(PromptEvent::Confirm),
                    on_dismiss: move |_| send(PromptEvent::Dismiss),
                }
            }
        }
    }
}
