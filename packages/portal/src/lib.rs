pub mod backend;
pub mod config;
pub mod controller;
pub mod models;
pub mod panel;

mod memory;
pub use memory::{MemoryBackend, MemoryError, MemoryView, ViewEvent};

pub use backend::HostelBackend;
pub use config::{
    AttendanceConfig, ComplaintConfig, EndpointsConfig, PortalConfig, ResponseOrdering,
};
pub use controller::{AttendanceOutcome, PageController, PageView, PortalError, Section};
pub use models::{
    AttendanceRecord, ComplaintAnalysis, ComplaintRequest, ComplaintTicket, LoginForm, Score,
    Session, COMPLAINT_CATEGORIES,
};
pub use panel::ComplaintPanel;
