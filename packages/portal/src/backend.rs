//! # Backend seam
//!
//! [`HostelBackend`] is the async interface the page controller talks to. It
//! has one method per outbound request. Implementations are
//! [`crate::MemoryBackend`] (tests and offline use) and `api::HttpBackend`
//! (reqwest over HTTP).
//!
//! Futures are not required to be `Send`: the page runs on a single-threaded
//! event loop.

use crate::models::{AttendanceRecord, ComplaintAnalysis, ComplaintTicket};

/// Async trait for the services the portal calls.
pub trait HostelBackend {
    type Error: std::error::Error + 'static;

    /// `POST /api/attendance`. Any response body is discarded.
    fn mark_attendance(
        &self,
        record: &AttendanceRecord,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>>;

    /// `POST /analyze` with `{"text": ...}`.
    fn analyze_complaint(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<ComplaintAnalysis, Self::Error>>;

    /// `POST /api/complaint`.
    fn file_complaint(
        &self,
        ticket: &ComplaintTicket,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>>;
}
