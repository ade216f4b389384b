//! Methods for managing an app's volumes.

use http::Method;

use crate::api::Volume;
use crate::client::Client;
use crate::error::Error;

/// List an app's volumes.
pub async fn list(c: &Client, app_id: &str, results: i64) -> Result<(Vec<Volume>, usize), Error> {
    let u = format!("/v2/apps/{app_id}/volumes/");
    c.limited_request(&u, results).await
}

/// Get an app's volume.
pub async fn get(c: &Client, app_id: &str, name: &str) -> Result<Volume, Error> {
    let u = format!("/v2/apps/{app_id}/volumes/{name}/");
    let res = c.request(Method::GET, &u, None).await?;
    res.json()
}

/// Create an app's volume.
pub async fn create(c: &Client, app_id: &str, volume: &Volume) -> Result<Volume, Error> {
    let u = format!("/v2/apps/{app_id}/volumes/");
    let res = c
        .request(Method::POST, &u, Some(serde_json::to_vec(volume)?))
        .await?;
    res.json()
}

/// Expand an app's volume to the size carried in `volume`.
pub async fn expand(c: &Client, app_id: &str, volume: &Volume) -> Result<Volume, Error> {
    let name = volume.name.as_deref().unwrap_or_default();
    let u = format!("/v2/apps/{app_id}/volumes/{name}/");
    let res = c
        .request(Method::PATCH, &u, Some(serde_json::to_vec(volume)?))
        .await?;
    res.json()
}

/// Delete an app's volume.
pub async fn delete(c: &Client, app_id: &str, name: &str) -> Result<(), Error> {
    let u = format!("/v2/apps/{app_id}/volumes/{name}/");
    c.request(Method::DELETE, &u, None).await?;
    Ok(())
}

/// Mount an app's volume and create a new release.
///
/// This is a patching operation on the volume's path map:
///
/// - a key that does not exist is set,
/// - a key that exists is overwritten,
/// - a key set to JSON `null` is unmounted,
/// - a key left out of the map remains unchanged.
///
/// Mounting an empty volume spec yields [`Error::Conflict`]; unmounting a
/// path key that does not exist yields [`Error::Unprocessable`].
pub async fn mount(c: &Client, app_id: &str, name: &str, volume: &Volume) -> Result<Volume, Error> {
    let u = format!("/v2/apps/{app_id}/volumes/{name}/path/");
    let res = c
        .request(Method::PATCH, &u, Some(serde_json::to_vec(volume)?))
        .await?;
    res.json()
}
