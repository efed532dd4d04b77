use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

use crate::config::AppConfig;
use crate::domain::{ProductRef, ResultSet, ScrollTracker};
use crate::ui_dioxus::components::ResultRow;
use crate::ui_dioxus::render_stats::RenderStats;

static NEXT_VIEWPORT_ID: AtomicU64 = AtomicU64::new(1);

/// Script that reports the current `scrollTop` of the element with `id`.
pub fn scroll_top_script(id: &str) -> String {
    format!(
        "let el = document.getElementById({:?}); dioxus.send(el ? el.scrollTop : 0);",
        id
    )
}

/// Total price header plus a virtualized viewport over `results`.
///
/// Only rows intersecting the viewport (plus overscan) are mounted. The
/// component itself is skipped by Dioxus while the page keeps handing it the
/// same `ResultSet` generation.
#[component]
pub fn ResultList(results: ResultSet, on_add_to_wishlist: EventHandler<u64>) -> Element {
    let config = use_hook(|| try_consume_context::<AppConfig>().unwrap_or_default());
    let viewport_id = use_hook(|| {
        format!("result-viewport-{}", NEXT_VIEWPORT_ID.fetch_add(1, Ordering::Relaxed))
    });
    let window = config.window();

    let mut viewport_height = use_signal(|| config.viewport_height);
    let mut scroll = use_signal(ScrollTracker::default);

    if let Some(stats) = try_consume_context::<RenderStats>() {
        stats.record_list_render();
    }

    let range = window.visible_range(results.len(), viewport_height(), scroll.read().offset());
    trace!(
        generation = results.generation(),
        start = range.start,
        end = range.end,
        "Rendering result window"
    );

    let rows: Vec<(f64, ProductRef)> = range
        .filter_map(|index| {
            results
                .get(index)
                .map(|product| (window.row_offset(index), product.clone()))
        })
        .collect();

    let total = results.total_price();
    let content_height = window.content_height(results.len());
    let row_height = window.row_height;
    let script = scroll_top_script(&viewport_id);

    rsx! {
        div {
            class: "result-list",

            h2 {
                class: "result-total",
                "Total: {total}"
            }

            div {
                id: "{viewport_id}",
                class: "result-viewport",
                style: "height: {config.viewport_height}px; overflow-y: auto; position: relative;
                       border: 1px solid #ddd; border-radius: 8px;",
                onmounted: move |event| async move {
                    match event.data().get_client_rect().await {
                        Ok(rect) if rect.height() > 0.0 => viewport_height.set(rect.height()),
                        Ok(_) => {}
                        Err(e) => debug!("Could not measure result viewport: {:?}", e),
                    }
                },
                onscroll: move |_| {
                    let seq = scroll.write().begin_read();
                    let mut reader = eval(&script);
                    async move {
                        match reader.recv().await {
                            Ok(value) => {
                                let offset = value.as_f64().unwrap_or(0.0);
                                if !scroll.write().apply(seq, offset) {
                                    trace!(seq, "Dropped out-of-date scroll offset");
                                }
                            }
                            Err(e) => debug!("Could not read scroll offset: {:?}", e),
                        }
                    }
                },

                div {
                    style: "height: {content_height}px; position: relative;",

                    for (top, product) in rows {
                        div {
                            key: "{product.id}",
                            style: "position: absolute; top: {top}px; left: 0; right: 0; height: {row_height}px;",

                            ResultRow {
                                product: product.clone(),
                                on_add_to_wishlist: on_add_to_wishlist,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_script_targets_viewport_element() {
        let script = scroll_top_script("result-viewport-7");
        assert!(script.contains(r#"document.getElementById("result-viewport-7")"#));
        assert!(script.contains("dioxus.send(el ? el.scrollTop : 0)"));
    }
}
