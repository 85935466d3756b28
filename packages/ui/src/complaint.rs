//! Complaint analysis form, its result panel, and the ticket form.

use dioxus::prelude::*;
use portal::{ComplaintPanel, COMPLAINT_CATEGORIES};

use crate::icons::FaPaperPlane;
use crate::page::{use_page, use_page_state};
use crate::Icon;

/// Sends the complaint text for analysis. Overlapping submissions are not
/// blocked; the controller's ordering policy decides which result stays.
#[component]
pub fn ComplaintForm() -> Element {
    let page = use_page();
    let mut text = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let page = page.clone();
        let body = text();
        spawn(async move {
            page.submit_complaint(&body).await;
        });
    };

    rsx! {
        form {
            class: "complaint-form",
            onsubmit: handle_submit,

            textarea {
                id: "complaint-desc",
                rows: 4,
                placeholder: "Describe the problem",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }

            button {
                class: "primary",
                r#type: "submit",
                Icon { icon: FaPaperPlane, width: 14, height: 14 }
                " Analyze"
            }
        }
    }
}

/// Shows "Analyzing", the classification, or the failure message.
#[component]
pub fn AnalysisPanel() -> Element {
    let state = use_page_state();
    let panel = state().complaint;

    let class = if panel.is_visible() {
        "ai-analysis"
    } else {
        "ai-analysis hidden"
    };

    let body = match &panel {
        ComplaintPanel::Result(analysis) => rsx! {
            for (label, value) in analysis.rows() {
                b { "{label}:" }
                " {value}"
                br {}
            }
        },
        other => {
            let message = other.text();
            rsx! { "{message}" }
        }
    };

    rsx! {
        div {
            id: "ai-analysis",
            class: "{class}",
            p {
                id: "ai-analysis-text",
                {body}
            }
        }
    }
}

/// Files a categorised complaint against the student's room.
#[component]
pub fn TicketForm() -> Element {
    let page = use_page();
    let mut category = use_signal(|| COMPLAINT_CATEGORIES[0].to_string());
    let mut description = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let page = page.clone();
        let (c, d) = (category(), description());
        spawn(async move {
            if page.file_complaint(&c, &d).await.is_ok() {
                description.set(String::new());
            }
        });
    };

    rsx! {
        form {
            class: "ticket-form",
            onsubmit: handle_submit,

            select {
                id: "complaint-category",
                value: category(),
                onchange: move |evt| category.set(evt.value()),
                for name in COMPLAINT_CATEGORIES {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }

            textarea {
                id: "complaint-details",
                rows: 3,
                placeholder: "What happened?",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            button {
                r#type: "submit",
                "File complaint"
            }
        }
    }
}
