//! Methods for managing configuration of apps.

use http::Method;

use crate::api::{Config, ConfigSet, ConfigUnset};
use crate::client::Client;
use crate::error::Error;

/// Get an app's current config.
pub async fn list(c: &Client, app_id: &str) -> Result<Config, Error> {
    let u = format!("/v2/apps/{app_id}/config/");
    let res = c.request(Method::GET, &u, None).await?;
    res.json()
}

/// Set config variables on an app, creating a new release.
pub async fn set(c: &Client, app_id: &str, values: &ConfigSet) -> Result<Config, Error> {
    let u = format!("/v2/apps/{app_id}/config/");
    let res = c
        .request(Method::POST, &u, Some(serde_json::to_vec(values)?))
        .await?;
    res.json()
}

/// Unset config variables on an app, creating a new release.
pub async fn unset(c: &Client, app_id: &str, values: &ConfigUnset) -> Result<Config, Error> {
    let u = format!("/v2/apps/{app_id}/config/");
    let res = c
        .request(Method::POST, &u, Some(serde_json::to_vec(values)?))
        .await?;
    res.json()
}
