use dioxus::prelude::*;

#[component]
pub fn WishlistConfirmation(on_confirm: EventHandler<()>, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "wishlist-confirmation",
            style: "display: inline-flex; align-items: center; gap: 6px; margin-left: 10px;",

            span { "Add to wishlist?" }

            button {
                style: "padding: 2px 10px; border: none; background: #3b82f6; color: white;
                       border-radius: 4px; cursor: pointer;",
                onclick: move |_| on_confirm.call(()),
                "Yes"
            }

            button {
                style: "padding: 2px 10px; border: 1px solid #ddd; background: white;
                       color: #333; border-radius: 4px; cursor: pointer;",
                onclick: move |_| on_dismiss.call(()),
                "No"
            }
        }
    }
}
