//! Methods for reading the controller's resource limit catalog.

use crate::api::{LimitPlan, LimitSpec};
use crate::client::Client;
use crate::error::Error;

/// List the available hardware specifications.
pub async fn specs(c: &Client, results: i64) -> Result<(Vec<LimitSpec>, usize), Error> {
    c.limited_request("/v2/limits/specs/", results).await
}

/// List the available resource plans.
pub async fn plans(c: &Client, results: i64) -> Result<(Vec<LimitPlan>, usize), Error> {
    c.limited_request("/v2/limits/plans/", results).await
}
