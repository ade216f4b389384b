//! Methods for managing apps.

use http::Method;

use crate::api::{App, AppCreateRequest, AppLogsRequest, AppRunRequest, AppUpdateRequest};
use crate::client::{Client, StreamRequest};
use crate::error::Error;

/// List the apps the user has access to.
pub async fn list(c: &Client, results: i64) -> Result<(Vec<App>, usize), Error> {
    c.limited_request("/v2/apps/", results).await
}

/// Get an app by name.
pub async fn get(c: &Client, app_id: &str) -> Result<App, Error> {
    let u = format!("/v2/apps/{app_id}/");
    let res = c.request(Method::GET, &u, None).await?;
    res.json()
}

/// Create a new app. An empty `app_id` lets the controller generate a name.
pub async fn create(c: &Client, app_id: &str) -> Result<App, Error> {
    let body = AppCreateRequest {
        id: (!app_id.is_empty()).then(|| app_id.to_string()),
    };
    let res = c
        .request(Method::POST, "/v2/apps/", Some(serde_json::to_vec(&body)?))
        .await?;
    res.json()
}

/// Run a one-off command in the app's environment.
pub async fn run(c: &Client, app_id: &str, request: &AppRunRequest) -> Result<(), Error> {
    let u = format!("/v2/apps/{app_id}/run");
    c.request(Method::POST, &u, Some(serde_json::to_vec(request)?))
        .await?;
    Ok(())
}

/// Transfer app ownership to another user.
pub async fn transfer(c: &Client, app_id: &str, owner: &str) -> Result<(), Error> {
    let body = AppUpdateRequest {
        owner: Some(owner.to_string()),
    };
    let u = format!("/v2/apps/{app_id}/");
    c.request(Method::POST, &u, Some(serde_json::to_vec(&body)?))
        .await?;
    Ok(())
}

/// Delete an app.
pub async fn delete(c: &Client, app_id: &str) -> Result<(), Error> {
    let u = format!("/v2/apps/{app_id}/");
    c.request(Method::DELETE, &u, None).await?;
    Ok(())
}

/// Build the dial material for streaming an app's aggregated logs.
pub fn logs_request(
    c: &Client,
    app_id: &str,
    request: &AppLogsRequest,
) -> Result<StreamRequest, Error> {
    let u = format!("/v2/apps/{app_id}/logs");
    Ok(StreamRequest {
        url: c.websocket_url(&u)?,
        headers: c.auth_headers()?,
        payload: serde_json::to_value(request)?,
    })
}
