use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::backend::HostelBackend;
use crate::controller::{PageView, Section};
use crate::models::{AttendanceRecord, ComplaintAnalysis, ComplaintTicket};
use crate::panel::ComplaintPanel;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MemoryError {
    #[error("service unavailable")]
    Unavailable,
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("no scripted analysis left")]
    Exhausted,
}

#[derive(Debug, Default)]
struct MemoryState {
    attendance: Vec<AttendanceRecord>,
    analyze_requests: Vec<String>,
    tickets: Vec<ComplaintTicket>,
    analyses: VecDeque<Result<ComplaintAnalysis, MemoryError>>,
    attendance_failure: Option<MemoryError>,
    ticket_failure: Option<MemoryError>,
}

/// In-memory HostelBackend for testing and offline demos.
///
/// Records every request and replays scripted analysis results in order.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next analysis call.
    pub fn push_analysis(&self, result: Result<ComplaintAnalysis, MemoryError>) {
        self.state.lock().unwrap().analyses.push_back(result);
    }

    /// Queue a raw JSON body as the next analysis response.
    pub fn push_analysis_json(&self, body: &str) {
        let result = serde_json::from_str(body)
            .map_err(|e| MemoryError::InvalidResponse(e.to_string()));
        self.push_analysis(result);
    }

    /// Make every attendance delivery fail with `err`.
    pub fn fail_attendance(&self, err: MemoryError) {
        self.state.lock().unwrap().attendance_failure = Some(err);
    }

    /// Make every complaint ticket fail with `err`.
    pub fn fail_tickets(&self, err: MemoryError) {
        self.state.lock().unwrap().ticket_failure = Some(err);
    }

    pub fn attendance(&self) -> Vec<AttendanceRecord> {
        self.state.lock().unwrap().attendance.clone()
    }

    pub fn analyze_requests(&self) -> Vec<String> {
        self.state.lock().unwrap().analyze_requests.clone()
    }

    pub fn tickets(&self) -> Vec<ComplaintTicket> {
        self.state.lock().unwrap().tickets.clone()
    }
}

impl HostelBackend for MemoryBackend {
    type Error = MemoryError;

    async fn mark_attendance(&self, record: &AttendanceRecord) -> Result<(), MemoryError> {
        let mut state = self.state.lock().unwrap();
        // The request is still "sent" when the backend then rejects it.
        state.attendance.push(record.clone());
        match &state.attendance_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn analyze_complaint(&self, text: &str) -> Result<ComplaintAnalysis, MemoryError> {
        let mut state = self.state.lock().unwrap();
        state.analyze_requests.push(text.to_string());
        state.analyses.pop_front().unwrap_or(Err(MemoryError::Exhausted))
    }

    async fn file_complaint(&self, ticket: &ComplaintTicket) -> Result<(), MemoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.ticket_failure {
            return Err(err.clone());
        }
        state.tickets.push(ticket.clone());
        Ok(())
    }
}

/// One call made on a [`PageView`].
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Welcome(String),
    Section(Section),
    Notice(String),
    Panel(ComplaintPanel),
}

/// PageView that records what the controller asked it to show.
#[derive(Clone, Debug, Default)]
pub struct MemoryView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn welcome(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Welcome(text) => Some(text),
            _ => None,
        })
    }

    /// Visible section; the login section until told otherwise.
    pub fn section(&self) -> Section {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Section(section) => Some(section),
                _ => None,
            })
            .unwrap_or(Section::Login)
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Current panel; hidden until the first submission.
    pub fn panel(&self) -> ComplaintPanel {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Panel(panel) => Some(panel),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl PageView for MemoryView {
    fn set_welcome(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Welcome(text.to_string()));
    }

    fn show_section(&self, section: Section) {
        self.events.lock().unwrap().push(ViewEvent::Section(section));
    }

    fn notify(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Notice(message.to_string()));
    }

    fn set_complaint_panel(&self, panel: &ComplaintPanel) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Panel(panel.clone()));
    }
}
