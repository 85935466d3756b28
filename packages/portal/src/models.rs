//! # Payloads exchanged with the hostel services
//!
//! Every type here is `Serialize + Deserialize` and maps one-to-one onto the
//! JSON the portal sends or receives. Nothing is validated locally: form values
//! are taken as typed, and the analysis result has whatever content the
//! analysis service chose.
//!
//! | Type | Direction | Endpoint |
//! |------|-----------|----------|
//! | [`AttendanceRecord`] | out | `POST /api/attendance` |
//! | [`ComplaintRequest`] | out | `POST /analyze` |
//! | [`ComplaintAnalysis`] | in | response of `/analyze` |
//! | [`ComplaintTicket`] | out | `POST /api/complaint` |
//!
//! [`Session`] is not sent anywhere; it is the in-page record of who is
//! logged in, built from a [`LoginForm`].

use std::fmt;
use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Raw values of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub name: String,
    pub block: String,
    pub room: String,
}

impl LoginForm {
    pub fn new(
        name: impl Into<String>,
        block: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            block: block.into(),
            room: room.into(),
        }
    }

    pub fn into_session(self) -> Session {
        Session {
            name: self.name,
            block: self.block,
            room: self.room,
        }
    }
}

/// The student currently using the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub block: String,
    pub room: String,
}

impl Session {
    /// Greeting shown on the dashboard.
    pub fn welcome(&self) -> String {
        format!("Welcome, {} (Block {})", self.name, self.block)
    }
}

/// One attendance-marking event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub student_name: String,
    pub hostel_block: String,
    pub room_number: String,
    /// UTC calendar date, `YYYY-MM-DD`.
    pub attendance_date: String,
    /// Local wall-clock time in the configured format.
    pub attendance_time: String,
    pub wifi_verified: bool,
    pub device_verified: bool,
}

const FALLBACK_TIME_FORMAT: &str = "%H:%M:%S";

impl AttendanceRecord {
    /// Build a record for `session` at `now`.
    ///
    /// The date is taken in UTC while the time keeps `now`'s own offset, so
    /// around midnight the two can disagree about the day. An invalid
    /// `time_format` falls back to `HH:MM:SS`.
    pub fn stamp<Tz>(session: &Session, now: &DateTime<Tz>, time_format: &str) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let attendance_date = now
            .with_timezone(&Utc)
            .date_naive()
            .format("%Y-%m-%d")
            .to_string();

        let mut attendance_time = String::new();
        if write!(attendance_time, "{}", now.format(time_format)).is_err() {
            tracing::warn!("Invalid attendance time format {:?}", time_format);
            attendance_time = now.format(FALLBACK_TIME_FORMAT).to_string();
        }

        Self {
            student_name: session.name.clone(),
            hostel_block: session.block.clone(),
            room_number: session.room.clone(),
            attendance_date,
            attendance_time,
            wifi_verified: true,
            device_verified: true,
        }
    }
}

/// Body of an analysis request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRequest {
    pub text: String,
}

/// A numeric-or-text value reported by the analysis service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{n}"),
            Score::Text(s) => f.write_str(s),
        }
    }
}

/// Classification returned by the analysis service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplaintAnalysis {
    pub priority: String,
    pub category: String,
    pub confidence: Score,
    pub priority_score: Score,
}

impl ComplaintAnalysis {
    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Priority", self.priority.to_uppercase()),
            ("Category", self.category.clone()),
            ("Confidence", self.confidence.to_string()),
            ("Score", self.priority_score.to_string()),
        ]
    }
}

impl fmt::Display for ComplaintAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

/// Categories the analysis service classifies complaints into.
pub const COMPLAINT_CATEGORIES: [&str; 9] = [
    "Mess / Food",
    "Water Supply",
    "Electricity",
    "Internet / WiFi",
    "Cleanliness",
    "Room / Furniture",
    "Security",
    "Administration",
    "Other",
];

/// A complaint filed against the student's room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplaintTicket {
    pub student_name: String,
    pub hostel_block: String,
    pub room_number: String,
    pub complaint_category: String,
    pub complaint_description: String,
}

impl ComplaintTicket {
    pub fn new(session: &Session, category: &str, description: &str) -> Self {
        Self {
            student_name: session.name.clone(),
            hostel_block: session.block.clone(),
            room_number: session.room.clone(),
            complaint_category: category.to_string(),
            complaint_description: description.to_string(),
        }
    }
}
