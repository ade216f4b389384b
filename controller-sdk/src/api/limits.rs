use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A hardware specification from `GET /v2/limits/specs/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSpec {
    pub id: String,
    pub cpu: HashMap<String, serde_json::Value>,
    pub memory: HashMap<String, serde_json::Value>,
    pub features: HashMap<String, serde_json::Value>,
    pub keywords: Vec<String>,
    pub disabled: bool,
}

/// A resource plan from `GET /v2/limits/plans/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitPlan {
    pub id: String,
    pub spec: LimitSpec,
    pub cpu: i64,
    pub memory: i64,
    pub features: HashMap<String, serde_json::Value>,
    pub disabled: bool,
}
