use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
///
/// `status` is the only field the UI relies on; `database` and `error` are
/// reported by the backend when it can tell whether its storage is reachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
