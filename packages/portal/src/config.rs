//! # Portal configuration — `portal.toml`
//!
//! Defines the TOML file that tells the page where its collaborators live and
//! how strictly it reports their outcomes. The web build embeds the file at
//! compile time; native builds may additionally override endpoints from the
//! environment (see `api::config`).
//!
//! ## Structure
//!
//! ```toml
//! [endpoints]
//! origin = "http://127.0.0.1:5000"        # base for relative endpoint paths
//! attendance = "/api/attendance"
//! complaint = "/api/complaint"
//! analyze = "http://127.0.0.1:5000/analyze"
//!
//! [attendance]
//! confirm_delivery = false                # true: report failed deliveries
//! time_format = "%-I:%M:%S %p"            # chrono pattern for attendance_time
//!
//! [complaints]
//! ordering = "last-resolved"              # or "latest-request"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortalConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`EndpointsConfig`] | Endpoint URLs. Relative paths resolve against `origin`. |
//! | [`AttendanceConfig`] | Delivery reporting and the local time format. |
//! | [`ComplaintConfig`] | How overlapping analysis responses are applied. |
//!
//! Every section derives or implements `Default`, so a missing or empty file is
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub attendance: AttendanceConfig,
    #[serde(default)]
    pub complaints: ComplaintConfig,
}

/// Where the page sends its requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Base URL that relative endpoint paths are joined onto.
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_attendance")]
    pub attendance: String,
    #[serde(default = "default_complaint")]
    pub complaint: String,
    #[serde(default = "default_analyze")]
    pub analyze: String,
}

fn default_origin() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_attendance() -> String {
    "/api/attendance".to_string()
}

fn default_complaint() -> String {
    "/api/complaint".to_string()
}

fn default_analyze() -> String {
    "http://127.0.0.1:5000/analyze".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            attendance: default_attendance(),
            complaint: default_complaint(),
            analyze: default_analyze(),
        }
    }
}

/// Attendance submission behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// When false, "Attendance marked!" is shown even if delivery failed.
    #[serde(default)]
    pub confirm_delivery: bool,
    /// chrono format string for `attendance_time`.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_time_format() -> String {
    "%-I:%M:%S %p".to_string()
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            confirm_delivery: false,
            time_format: default_time_format(),
        }
    }
}

/// How responses to overlapping complaint submissions are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Apply every response as it arrives; the last one to resolve wins.
    #[default]
    LastResolved,
    /// Drop responses that belong to a superseded submission.
    LatestRequest,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplaintConfig {
    #[serde(default)]
    pub ordering: ResponseOrdering,
}

impl PortalConfig {
    /// Builder method to set the origin relative endpoints resolve against.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.endpoints.origin = origin.into();
        self
    }

    /// Builder method to set the overlapping-response policy.
    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.complaints.ordering = ordering;
        self
    }

    /// Builder method to report failed attendance deliveries.
    pub fn with_confirmed_delivery(mut self) -> Self {
        self.attendance.confirm_delivery = true;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
