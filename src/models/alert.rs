use serde::Serialize;

/// Body of POST /trigger-alert. The backend expects camelCase keys.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TriggerAlertRequest {
    pub user_id: String,
    pub location: String,
}
