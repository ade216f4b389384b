use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An application known to the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub created: String,
    pub id: String,
    pub owner: String,
    pub updated: String,
    pub uuid: String,
}

/// Body of `POST /v2/apps/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Body of `POST /v2/apps/<app id>/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Body of `POST /v2/apps/<app id>/run`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppRunRequest {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<u32>,
}

/// First message sent on the `/v2/apps/<app id>/logs` websocket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppLogsRequest {
    pub lines: i64,
    pub follow: bool,
    pub timeout: i64,
}
