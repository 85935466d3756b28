//! # Page controller — the three page handlers over an explicit session
//!
//! [`PageController`] owns everything the page mutates: the current
//! [`Session`], the complaint submission counter, and the configuration. It
//! talks to the outside world only through two seams:
//!
//! - a [`HostelBackend`] for outbound requests, and
//! - a [`PageView`] for everything the student sees.
//!
//! The controller is meant to live on a single-threaded event loop and be
//! shared by reference (`Rc` in the UI). Its state therefore sits in
//! `RefCell`/`Cell`, and no borrow is ever held across an `.await`, so
//! overlapping calls to its async methods are fine.
//!
//! ## Operations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`login`](PageController::login) | Replaces the session, greets the student, swaps login for dashboard. |
//! | [`mark_attendance`](PageController::mark_attendance) | Posts an [`AttendanceRecord`]; by default always reports success. |
//! | [`submit_complaint`](PageController::submit_complaint) | Shows "Analyzing", asks the analysis service, shows the result or a failure. |
//! | [`file_complaint`](PageController::file_complaint) | Posts a [`ComplaintTicket`] for the logged-in student. |
//!
//! ## Overlapping complaint submissions
//!
//! With [`ResponseOrdering::LastResolved`] every response is shown as it
//! arrives, so a slow early request can overwrite a fast later one. With
//! [`ResponseOrdering::LatestRequest`] each submission takes a generation
//! number and a response is only shown if no newer submission started since.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Local};

use crate::backend::HostelBackend;
use crate::config::{PortalConfig, ResponseOrdering};
use crate::models::{AttendanceRecord, ComplaintTicket, LoginForm, Session};
use crate::panel::ComplaintPanel;

pub const ATTENDANCE_MARKED: &str = "Attendance marked!";
pub const ATTENDANCE_FAILED: &str = "Attendance could not be recorded. Please try again.";
pub const COMPLAINT_FILED: &str = "Complaint submitted!";
pub const COMPLAINT_FAILED: &str = "Complaint could not be submitted. Please try again.";

/// Top-level page sections; exactly one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Login,
    Dashboard,
}

/// What the controller can change on screen.
pub trait PageView {
    fn set_welcome(&self, text: &str);
    fn show_section(&self, section: Section);
    /// Short message the student has to acknowledge.
    fn notify(&self, message: &str);
    fn set_complaint_panel(&self, panel: &ComplaintPanel);
}

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("no student is logged in")]
    NotLoggedIn,
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result of one attendance submission.
#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceOutcome {
    pub record: AttendanceRecord,
    /// Whether the backend accepted the record.
    pub delivered: bool,
}

pub struct PageController<B, V> {
    backend: B,
    view: V,
    config: PortalConfig,
    session: RefCell<Option<Session>>,
    generation: Cell<u64>,
    clock: fn() -> DateTime<Local>,
}

impl<B: HostelBackend, V: PageView> PageController<B, V> {
    pub fn new(backend: B, view: V, config: PortalConfig) -> Self {
        Self {
            backend,
            view,
            config,
            session: RefCell::new(None),
            generation: Cell::new(0),
            clock: Local::now,
        }
    }

    /// Replace the wall clock used to stamp attendance records.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// The logged-in student, if any.
    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Accept the form as-is and switch to the dashboard.
    pub fn login(&self, form: LoginForm) {
        let session = form.into_session();
        tracing::info!("Student {:?} logged in (block {:?})", session.name, session.block);

        self.view.set_welcome(&session.welcome());
        *self.session.borrow_mut() = Some(session);

        self.view.show_section(Section::Dashboard);
    }

    /// Send an attendance record for the current session.
    ///
    /// Unless `attendance.confirm_delivery` is set, the student is told
    /// "Attendance marked!" whether or not the backend accepted the record.
    pub async fn mark_attendance(&self) -> Result<AttendanceOutcome, PortalError> {
        let Some(session) = self.session() else {
            tracing::warn!("Attendance requested before login");
            return Err(PortalError::NotLoggedIn);
        };

        let now = (self.clock)();
        let record =
            AttendanceRecord::stamp(&session, &now, &self.config.attendance.time_format);

        let delivered = match self.backend.mark_attendance(&record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Attendance delivery failed: {}", e);
                false
            }
        };

        if delivered || !self.config.attendance.confirm_delivery {
            self.view.notify(ATTENDANCE_MARKED);
        } else {
            self.view.notify(ATTENDANCE_FAILED);
        }

        Ok(AttendanceOutcome { record, delivered })
    }

    /// Analyse `text` and show the outcome in the complaint panel.
    ///
    /// Never fails: every error ends in [`ComplaintPanel::Failed`]. Returns the
    /// panel state that was shown, or `None` if the response was dropped as
    /// stale.
    pub async fn submit_complaint(&self, text: &str) -> Option<ComplaintPanel> {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        self.view.set_complaint_panel(&ComplaintPanel::Analyzing);

        let result = self.backend.analyze_complaint(text).await;

        if self.config.complaints.ordering == ResponseOrdering::LatestRequest
            && self.generation.get() != generation
        {
            tracing::debug!(
                "Discarding analysis for submission {} (current is {})",
                generation,
                self.generation.get()
            );
            return None;
        }

        let panel = match result {
            Ok(analysis) => ComplaintPanel::Result(analysis),
            Err(e) => {
                tracing::error!("Complaint analysis failed: {}", e);
                ComplaintPanel::Failed
            }
        };
        self.view.set_complaint_panel(&panel);
        Some(panel)
    }

    /// File a complaint ticket for the logged-in student.
    pub async fn file_complaint(
        &self,
        category: &str,
        description: &str,
    ) -> Result<(), PortalError> {
        let Some(session) = self.session() else {
            tracing::warn!("Complaint filed before login");
            return Err(PortalError::NotLoggedIn);
        };

        let ticket = ComplaintTicket::new(&session, category, description);
        match self.backend.file_complaint(&ticket).await {
            Ok(()) => {
                self.view.notify(COMPLAINT_FILED);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to file complaint: {}", e);
                self.view.notify(COMPLAINT_FAILED);
                Err(PortalError::Backend(e.to_string()))
            }
        }
    }
}
