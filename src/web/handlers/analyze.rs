// POST /analyze: moderate a piece of text and assess its engagement.
//
// Returns 200 with `{flagged, categories, insights}` on success and 200
// with `{error}` when either provider call fails. Clients tell the two
// apart by the body, not the status.
//
// A body that doesn't parse as `{ "text": "<string>" }` never reaches the
// providers; it gets the extractor's 4xx status with an `{error}` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::analysis::Content;
use crate::web::{api_error, AppState};

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Content>, JsonRejection>,
) -> Response {
    let Json(content) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!(status = %rejection.status(), "Rejected /analyze body");
            return api_error(rejection.status(), &rejection.body_text());
        }
    };

    Json(state.analyzer.analyze(&content.text).await).into_response()
}
