//! Recording analysis endpoint
//!
//! `POST /analyze` takes a multipart body with an audio part named `file`
//! and a text field named `word`.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::models::AnalysisResult;
use crate::AppState;

/// Parsed `/analyze` form
#[derive(Debug)]
struct AnalyzeForm {
    audio: Bytes,
    word: String,
}

async fn read_form(mut multipart: Multipart) -> ApiResult<AnalyzeForm> {
    let mut audio = None;
    let mut word = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => audio = Some(field.bytes().await?),
            Some("word") => word = Some(field.text().await?),
            other => {
                tracing::debug!(field = ?other, "Ignoring unexpected multipart field");
            }
        }
    }

    let audio = audio.ok_or_else(|| ApiError::BadRequest("missing field 'file'".to_string()))?;
    let word = word.ok_or_else(|| ApiError::BadRequest("missing field 'word'".to_string()))?;

    Ok(AnalyzeForm { audio, word })
}

/// POST /analyze
pub async fn analyze_recording(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let form = read_form(multipart?).await?;

    tracing::debug!(word = %form.word, bytes = form.audio.len(), "Analyze request");

    match state.analyzer.analyze(&form.audio, &form.word).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            let err = ApiError::from(e);
            state.record_error(err.to_string()).await;
            Err(err)
        }
    }
}

/// Build analysis routes
pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_recording))
}
