use axum::response::Json;

use crate::models::RootMessage;

pub const ROOT_MESSAGE: &str = "Fantasy Draft Assistant backend running";

// GET / - Liveness message
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: ROOT_MESSAGE.to_string(),
    })
}
