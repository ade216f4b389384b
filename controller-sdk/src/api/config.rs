use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Distinguishes an absent patch field (`None`) from an explicit JSON
/// `null` (`Some(None)`, which clears the value server-side).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

/// Key/value tags restricting where an application may be scheduled.
pub type ConfigTags = HashMap<String, serde_json::Value>;

/// Named references to value groups, keyed by process type.
pub type ValuesRefs = HashMap<String, Vec<String>>;

/// A configuration variable for an app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigVar {
    pub name: String,
    pub value: serde_json::Value,
}

/// A configuration value with its process type and group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(flatten)]
    pub var: ConfigVar,
}

/// Values scoped to one process type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PtypeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<ConfigVar>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<String>>,
}

/// The complete configuration information for an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptype: Option<HashMap<String, PtypeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<HashMap<String, Vec<ConfigVar>>>,
}

/// Body of `POST /v2/apps/<app id>/config/` when setting values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSet {
    pub values: Vec<ConfigValue>,
}

/// Body of `POST /v2/apps/<app id>/config/` when unsetting values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUnset {
    pub values: Vec<ConfigValue>,
}

/// An app's config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The app owner. Cannot be updated with [`crate::config::set`]; see
    /// [`crate::apps::transfer`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The app name. Cannot be updated at all right now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    /// Values exposed as environment variables to the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<ConfigValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_refs: Option<ValuesRefs>,
    /// Process resource limits: process name to limit plan (e.g.
    /// `std1.xlarge.c1m1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<HashMap<String, serde_json::Value>>,
    /// Termination grace period: process name to seconds.
    #[serde(
        rename = "termination_grace_period",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<HashMap<String, serde_json::Value>>,
    /// Lifecycle actions for each process type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<HashMap<String, Lifecycle>>,
    /// Healthchecks for each process type the application uses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck: Option<HashMap<String, Healthcheck>>,
    /// Tags restrict applications to run on nodes with that label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, ConfigTags>>,
    /// Registry credentials: username to password material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<HashMap<String, HashMap<String, serde_json::Value>>>,
    /// Set by the controller; cannot be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Unique string reflecting the configuration in its current state;
    /// changes on every configuration change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Actions taken over the container lifecycle.
///
/// The double `Option` distinguishes an absent field from an explicit JSON
/// `null` (which clears the handler on a patch).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(
        rename = "postStart",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub post_start: Option<Option<LifecycleHandler>>,
    #[serde(
        rename = "preStop",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pre_stop: Option<Option<LifecycleHandler>>,
    #[serde(rename = "stopSignal", skip_serializing_if = "Option::is_none")]
    pub stop_signal: Option<String>,
}

/// One lifecycle action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifecycleHandler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,
    #[serde(rename = "httpGet", skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepAction>,
    #[serde(rename = "tcpSocket", skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,
}

impl fmt::Display for LifecycleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exec Probe: {}", or_na(self.exec.as_ref()))?;
        writeln!(f, "HTTP GET Action: {}", or_na(self.http_get.as_ref()))?;
        writeln!(f, "Sleep Action: {}", or_na(self.sleep.as_ref()))?;
        write!(f, "TCP Socket Action: {}", or_na(self.tcp_socket.as_ref()))
    }
}

/// A container healthcheck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Healthcheck {
    #[serde(
        rename = "startupProbe",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub startup_probe: Option<Option<ContainerProbe>>,
    #[serde(
        rename = "livenessProbe",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub liveness_probe: Option<Option<ContainerProbe>>,
    #[serde(
        rename = "readinessProbe",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub readiness_probe: Option<Option<ContainerProbe>>,
}

/// A container healthcheck probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerProbe {
    #[serde(rename = "initialDelaySeconds")]
    pub initial_delay_seconds: i32,
    #[serde(rename = "timeoutSeconds")]
    pub timeout_seconds: i32,
    #[serde(rename = "periodSeconds")]
    pub period_seconds: i32,
    #[serde(rename = "successThreshold")]
    pub success_threshold: i32,
    #[serde(rename = "failureThreshold")]
    pub failure_threshold: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc: Option<GrpcAction>,
    #[serde(rename = "httpGet", skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,
    #[serde(rename = "tcpSocket", skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,
}

impl fmt::Display for ContainerProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial Delay (seconds): {}", self.initial_delay_seconds)?;
        writeln!(f, "Timeout (seconds): {}", self.timeout_seconds)?;
        writeln!(f, "Period (seconds): {}", self.period_seconds)?;
        writeln!(f, "Success Threshold: {}", self.success_threshold)?;
        writeln!(f, "Failure Threshold: {}", self.failure_threshold)?;
        writeln!(f, "Exec Probe: {}", or_na(self.exec.as_ref()))?;
        writeln!(f, "GRPC Probe: {}", or_na(self.grpc.as_ref()))?;
        writeln!(f, "HTTP GET Probe: {}", or_na(self.http_get.as_ref()))?;
        write!(f, "TCP Socket Probe: {}", or_na(self.tcp_socket.as_ref()))
    }
}

/// A key/value pair used to parse values from strings into a formal
/// structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KvPair {
    pub name: String,
    pub value: String,
}

impl fmt::Display for KvPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Executes a command within a pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecAction {
    pub command: Vec<String>,
}

impl fmt::Display for ExecAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command=[{}]", self.command.join(" "))
    }
}

/// Performs an HTTP GET request against the pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpGetAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub port: i32,
    #[serde(rename = "httpHeaders", skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<Vec<KvPair>>,
}

impl fmt::Display for HttpGetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self
            .http_headers
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "Path=\"{}\" Port={} HTTPHeaders=[{}]",
            self.path.as_deref().unwrap_or_default(),
            self.port,
            headers
        )
    }
}

/// Attempts to open a socket connection to the pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TcpSocketAction {
    pub port: i32,
}

impl fmt::Display for TcpSocketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port={}", self.port)
    }
}

/// Performs a gRPC health request against the pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrpcAction {
    pub port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl fmt::Display for GrpcAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Port={} Service=\"{}\"",
            self.port,
            self.service.as_deref().unwrap_or_default()
        )
    }
}

/// Pauses for a specified number of seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepAction {
    pub seconds: i32,
}

impl fmt::Display for SleepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seconds={}", self.seconds)
    }
}

fn or_na<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "N/A".to_string(), ToString::to_string)
}
