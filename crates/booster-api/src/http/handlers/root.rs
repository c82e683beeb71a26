//! GET / - Welcome message.

use axum::Json;

use booster_types::payload::WelcomeResponse;

/// GET / - Static greeting. Ignores query, headers and body.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}
