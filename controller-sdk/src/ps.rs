//! Methods for managing app processes.

use http::Method;

use crate::api::{Command, Pod, PodIds, PodLogsRequest, PodState, PodType};
use crate::client::{Client, StreamRequest};
use crate::error::Error;

/// List an app's processes.
pub async fn list(c: &Client, app_id: &str, results: i64) -> Result<(Vec<Pod>, usize), Error> {
    let u = format!("/v2/apps/{app_id}/pods/");
    c.limited_request(&u, results).await
}

/// Describe a pod: its containers' states.
pub async fn describe(
    c: &Client,
    app_id: &str,
    pod_id: &str,
    results: i64,
) -> Result<(PodState, usize), Error> {
    let u = format!("/v2/apps/{app_id}/pods/{pod_id}/describe/");
    c.limited_request(&u, results).await
}

/// Delete pods from an app. `pod_ids` is a comma-separated list of pod
/// names.
pub async fn delete(c: &Client, app_id: &str, pod_ids: &str) -> Result<(), Error> {
    let u = format!("/v2/apps/{app_id}/pods/");
    let body = PodIds {
        pod_ids: pod_ids.to_string(),
    };
    c.request(Method::DELETE, &u, Some(serde_json::to_vec(&body)?))
        .await?;
    Ok(())
}

/// Build the dial material for streaming a pod's logs.
pub fn logs_request(
    c: &Client,
    app_id: &str,
    pod_id: &str,
    request: &PodLogsRequest,
) -> Result<StreamRequest, Error> {
    let u = format!("/v2/apps/{app_id}/pods/{pod_id}/logs/");
    Ok(StreamRequest {
        url: c.websocket_url(&u)?,
        headers: c.auth_headers()?,
        payload: serde_json::to_value(request)?,
    })
}

/// Build the dial material for executing a command in a pod.
pub fn exec_request(
    c: &Client,
    app_id: &str,
    pod_id: &str,
    command: &Command,
) -> Result<StreamRequest, Error> {
    let u = format!("/v2/apps/{app_id}/pods/{pod_id}/exec/");
    Ok(StreamRequest {
        url: c.websocket_url(&u)?,
        headers: c.auth_headers()?,
        payload: serde_json::to_value(command)?,
    })
}

/// Organize an app's processes by process type, with pods and types sorted
/// alphabetically.
pub fn by_type(processes: Vec<Pod>) -> Vec<PodType> {
    let mut types: Vec<PodType> = Vec::new();

    for process in processes {
        let ptype = process.ptype.clone().unwrap_or_default();
        match types.iter().position(|t| t.ptype == ptype) {
            Some(i) => types[i].pods.push(process),
            None => types.push(PodType {
                ptype,
                pods: vec![process],
            }),
        }
    }

    for t in &mut types {
        t.pods.sort_by(|a, b| a.name.cmp(&b.name));
    }
    types.sort_by(|a, b| a.ptype.cmp(&b.ptype));

    types
}
