//! # API crate — HTTP access to the hostel services
//!
//! The portal core ([`portal`]) talks to its collaborators through the
//! [`portal::HostelBackend`] trait. This crate provides the real
//! implementation on top of `reqwest`, which runs natively and, through the
//! browser's `fetch`, in WASM.
//!
//! ## Modules
//!
//! | Module | Target | Purpose |
//! |--------|--------|---------|
//! | [`config`] | native only | Overrides endpoint settings from `.env` / environment variables |
//! | [`error`] | all | [`ApiError`], the failure type of every request |
//! | [`http`] | all | [`HttpBackend`], endpoint resolution and the three POST requests |
//!
//! ## Requests
//!
//! | Method | Endpoint (default) | Body |
//! |--------|--------------------|------|
//! | `mark_attendance` | `/api/attendance` | [`portal::AttendanceRecord`] |
//! | `analyze_complaint` | `http://127.0.0.1:5000/analyze` | [`portal::ComplaintRequest`] |
//! | `file_complaint` | `/api/complaint` | [`portal::ComplaintTicket`] |
//!
//! Relative endpoints are joined onto the configured origin. Any non-2xx status
//! is reported as [`ApiError::Status`]; whether that matters is the
//! controller's decision.

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::HttpBackend;

pub use portal::{ComplaintAnalysis, PortalConfig};
