use dioxus::prelude::*;
use portal::Section;

use crate::complaint::{AnalysisPanel, ComplaintForm, TicketForm};
use crate::icons::FaCalendarCheck;
use crate::page::{use_page, use_page_state, PageState};
use crate::Icon;

/// Dashboard shown after login.
#[component]
pub fn Dashboard() -> Element {
    let state = use_page_state();
    let PageState { section, welcome, .. } = state();

    let class = if section == Section::Dashboard {
        "dashboard"
    } else {
        "dashboard hidden"
    };

    rsx! {
        div {
            id: "dashboard",
            class: "{class}",

            h2 { id: "welcome", "{welcome}" }

            AttendanceButton {}

            div {
                class: "card",
                h3 { "Report a problem" }
                ComplaintForm {}
                AnalysisPanel {}
            }

            div {
                class: "card",
                h3 { "File a complaint" }
                TicketForm {}
            }
        }
    }
}

/// Marks attendance for the logged-in student.
#[component]
pub fn AttendanceButton() -> Element {
    let page = use_page();

    let onclick = move |_| {
        let page = page.clone();
        async move {
            if let Err(e) = page.mark_attendance().await {
                tracing::warn!("Attendance not sent: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "primary attendance-btn",
            onclick: onclick,
            Icon { icon: FaCalendarCheck, width: 14, height: 14 }
            " Mark attendance"
        }
    }
}
