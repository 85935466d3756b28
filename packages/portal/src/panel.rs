//! State of the complaint analysis panel.

use crate::models::ComplaintAnalysis;

pub const ANALYZING_MESSAGE: &str = "Analyzing complaint priority...";
pub const ANALYSIS_FAILED_MESSAGE: &str = "AI analysis failed. Please try again.";

/// `Hidden -> Analyzing -> {Result | Failed}`. `Analyzing` can be re-entered
/// from any state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ComplaintPanel {
    #[default]
    Hidden,
    Analyzing,
    Result(ComplaintAnalysis),
    Failed,
}

impl ComplaintPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ComplaintPanel::Hidden)
    }

    /// Plain-text content of the panel.
    pub fn text(&self) -> String {
        match self {
            ComplaintPanel::Hidden => String::new(),
            ComplaintPanel::Analyzing => ANALYZING_MESSAGE.to_string(),
            ComplaintPanel::Result(analysis) => analysis.to_string(),
            ComplaintPanel::Failed => ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}
