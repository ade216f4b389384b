use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `PATCH /v2/apps/<app id>/volumes/<name>/path/` when mounting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mount {
    pub values: HashMap<String, String>,
}

/// Body of `PATCH /v2/apps/<app id>/volumes/<name>/path/` when unmounting:
/// a path key mapped to JSON `null` is removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Unmount {
    pub values: HashMap<String, serde_json::Value>,
}

/// An app's volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// The app owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The app the volume belongs to; cannot be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Unique string reflecting the volume in its current state; changes on
    /// every volume change and cannot be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Mount paths, keyed by process type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<HashMap<String, serde_json::Value>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, serde_json::Value>>,
}
