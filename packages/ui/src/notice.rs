//! Notification banner standing in for a browser alert.

use dioxus::prelude::*;

use crate::page::use_page_state;

#[component]
pub fn Notice() -> Element {
    let mut state = use_page_state();

    let Some(message) = state().notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice",
            role: "alert",
            span { "{message}" }
            button {
                onclick: move |_| state.write().notice = None,
                "OK"
            }
        }
    }
}
