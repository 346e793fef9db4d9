use serde::{Deserialize, Serialize};

/// A draftable player.
///
/// `adp` and `projection` are left out of the JSON when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<f64>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Player {
            name: name.into(),
            team: team.into(),
            position: position.into(),
            adp: None,
            projection: None,
        }
    }
}

/// Body of the root endpoint
#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
}

impl HealthResponse {
    /// A healthy status stamped with the current Unix time.
    pub fn ok_now() -> Self {
        HealthResponse {
            status: "ok",
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
