//! Shared helpers for vowel-coach integration tests

#![allow(dead_code)]

pub mod audio_generator;
pub mod multipart;
pub mod stub_transcriber;

use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use vowel_coach::services::VowelAnalyzer;
use vowel_coach::{build_router, AppState};
use vowel_common::ExpectationTable;

use stub_transcriber::StubTranscriber;

/// App wired to a stub transcriber and a private temp directory
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub transcriber: Arc<StubTranscriber>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn new(transcriber: StubTranscriber) -> Self {
        Self::with_table(transcriber, ExpectationTable::builtin())
    }

    pub fn with_table(transcriber: StubTranscriber, table: ExpectationTable) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let transcriber = Arc::new(transcriber);
        let analyzer = VowelAnalyzer::new(
            transcriber.clone(),
            table,
            temp_dir.path().to_path_buf(),
            Duration::from_secs(5),
        );
        let state = AppState::new(analyzer, 25 * 1024 * 1024);
        let router = build_router(state.clone());

        Self {
            router,
            state,
            transcriber,
            temp_dir,
        }
    }

    /// Files currently left in the temp directory
    pub fn leftover_files(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path()).unwrap().count()
    }
}

/// Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("Should read body").to_bytes();
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
