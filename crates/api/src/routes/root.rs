use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- plain-text greeting.
async fn index() -> &'static str {
    "Welcome to my Movie API!"
}

/// Mount the root greeting route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
