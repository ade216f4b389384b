use serde::{Deserialize, Serialize};

/// One process (pod) of an app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ptype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restarts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
}

/// Pods of one process type, as grouped by [`crate::ps::by_type`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodType {
    pub ptype: String,
    pub pods: Vec<Pod>,
}

/// Container-level status returned by the pod describe endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub ready: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The state of one pod: its containers' statuses.
pub type PodState = Vec<ContainerState>;

/// Body of `DELETE /v2/apps/<app id>/pods/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodIds {
    pub pod_ids: String,
}

/// First message sent on the pod exec websocket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Command {
    pub tty: bool,
    pub stdin: bool,
    pub command: Vec<String>,
}

/// First message sent on the pod logs websocket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodLogsRequest {
    pub lines: i64,
    pub follow: bool,
    pub timeout: i64,
}
