//! Login section: three free-text fields, no validation.

use dioxus::prelude::*;
use portal::{LoginForm, Section};

use crate::page::{use_page, use_page_state};

#[component]
pub fn LoginSection() -> Element {
    let page = use_page();
    let state = use_page_state();
    let mut name = use_signal(String::new);
    let mut block = use_signal(String::new);
    let mut room = use_signal(String::new);

    let class = if state().section == Section::Login {
        "login"
    } else {
        "login hidden"
    };

    let handle_login = move |_| {
        page.login(LoginForm::new(name(), block(), room()));
    };

    rsx! {
        section {
            class: "{class}",
            h1 { "Hostel Portal" }

            label { r#for: "name", "Name" }
            input {
                id: "name",
                r#type: "text",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }

            label { r#for: "block", "Block" }
            input {
                id: "block",
                r#type: "text",
                value: block(),
                oninput: move |evt: FormEvent| block.set(evt.value()),
            }

            label { r#for: "room", "Room" }
            input {
                id: "room",
                r#type: "text",
                value: room(),
                oninput: move |evt: FormEvent| room.set(evt.value()),
            }

            button {
                class: "primary",
                onclick: handle_login,
                "Login"
            }
        }
    }
}
