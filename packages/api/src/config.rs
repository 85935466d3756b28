//! Endpoint overrides from environment variables.

use portal::PortalConfig;

/// Environment variables that override `[endpoints]`.
pub const ORIGIN_VAR: &str = "HOSTEL_ORIGIN";
pub const ATTENDANCE_VAR: &str = "HOSTEL_ATTENDANCE_URL";
pub const COMPLAINT_VAR: &str = "HOSTEL_COMPLAINT_URL";
pub const ANALYZE_VAR: &str = "HOSTEL_ANALYZE_URL";

/// Load `.env` if present and apply any endpoint overrides found in the
/// process environment.
pub fn apply_env(config: PortalConfig) -> PortalConfig {
    dotenvy::dotenv().ok();
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(
    mut config: PortalConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> PortalConfig {
    let endpoints = &mut config.endpoints;
    let slots = [
        (ORIGIN_VAR, &mut endpoints.origin),
        (ATTENDANCE_VAR, &mut endpoints.attendance),
        (COMPLAINT_VAR, &mut endpoints.complaint),
        (ANALYZE_VAR, &mut endpoints.analyze),
    ];

    for (key, slot) in slots {
        if let Some(value) = lookup(key) {
            tracing::debug!("{} overrides endpoint {:?}", key, slot);
            *slot = value;
        }
    }

    config
}
