/// Base URL of the alert backend.
/// Configured at compile time via the ALERT_API_URL env var (see build.rs,
/// which forwards .env entries). There is no default: a missing URL is a
/// recoverable configuration error reported when the user confirms an alert,
/// never a crash.
pub const ALERT_API_URL: Option<&str> = option_env!("ALERT_API_URL");

/// Seconds the user has to confirm before the countdown abandons the alert.
pub const CONFIRM_WINDOW_SECS: u32 = 10;
