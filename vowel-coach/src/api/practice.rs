//! Practice word listing endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::models::PracticeList;
use crate::AppState;

/// GET /practice
///
/// One entry per expectation table word, each linking to the recording page.
pub async fn list_practice_words(State(state): State<AppState>) -> Json<PracticeList> {
    Json(PracticeList::from_table(state.analyzer.expectations()))
}

/// Build practice routes
pub fn practice_routes() -> Router<AppState> {
    Router::new().route("/practice", get(list_practice_words))
}
