// ============================================================================
// ALERT CLIENT - SOLO HTTP communication (stateless)
// ============================================================================
// No business logic here, just the one request the widget makes.
// ============================================================================

use gloo_net::http::Request;

use crate::config::ALERT_API_URL;
use crate::models::TriggerAlertRequest;

/// Client for the alert backend. Holds the base URL (or its absence, which is
/// reported as a configuration error on use rather than at startup).
#[derive(Clone, PartialEq)]
pub struct AlertClient {
    base_url: Option<String>,
}

impl AlertClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    /// Builds the client from the compile-time ALERT_API_URL configuration.
    pub fn from_env() -> Self {
        Self::new(ALERT_API_URL.map(str::to_string))
    }

    /// Fires the emergency alert. Any 2xx response is success; the body is
    /// ignored. Failures come back as the message to show the user.
    pub async fn trigger_alert(&self, request: &TriggerAlertRequest) -> Result<(), String> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| "Configuration error: missing alert endpoint URL".to_string())?;

        let url = format!("{}/trigger-alert", base_url);
        log::info!("🚨 Triggering alert for {} at {}", request.user_id, request.location);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            log::info!("✅ Alert accepted by backend ({})", response.status());
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = failure_message(status, &body);
        log::error!("❌ Alert rejected: {}", message);
        Err(message)
    }
}

/// Error text for a non-2xx response: the body if the backend sent one,
/// otherwise a status-code fallback.
fn failure_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("Status {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_the_response_body() {
        assert_eq!(failure_message(500, "server down"), "server down");
    }

    #[test]
    fn failure_message_falls_back_to_the_status_code() {
        assert_eq!(failure_message(502, ""), "Status 502");
        assert_eq!(failure_message(500, "  \n"), "Status 500");
    }

    #[test]
    fn missing_endpoint_is_a_configuration_error_with_no_network_call() {
        let client = AlertClient::new(None);
        let request = TriggerAlertRequest {
            user_id: "Trevah".to_string(),
            location: "Soshanguve South".to_string(),
        };

        // Resolves immediately: the config check happens before any request
        // is built, so this never touches the network.
        let err = futures::executor::block_on(client.trigger_alert(&request)).unwrap_err();
        assert_eq!(err, "Configuration error: missing alert endpoint URL");
    }
}
