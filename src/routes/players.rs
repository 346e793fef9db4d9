use axum::response::{Json, Redirect};

use crate::models::Player;

/// Placeholder board until real player data is loaded.
fn placeholder_players() -> Vec<Player> {
    vec![Player::new("Justin Jefferson", "MIN", "WR")]
}

// GET /players/ - List players
pub async fn list_players() -> Json<Vec<Player>> {
    tracing::debug!("Serving placeholder player list");
    Json(placeholder_players())
}

// GET /players - Redirect to the canonical trailing-slash path
pub async fn redirect_to_list() -> Redirect {
    Redirect::temporary("/players/")
}
