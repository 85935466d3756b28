//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod page;
pub use page::{use_page, use_page_state, Page, PageProvider, PageState, SignalView};

mod login;
pub use login::LoginSection;

mod dashboard;
pub use dashboard::{AttendanceButton, Dashboard};

mod complaint;
pub use complaint::{AnalysisPanel, ComplaintForm, TicketForm};

mod notice;
pub use notice::Notice;
