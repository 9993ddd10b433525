//! Hand-built multipart/form-data request bodies

use axum::body::Body;
use axum::http::Request;

const BOUNDARY: &str = "vowel-coach-test-boundary";

/// Form parts for `/analyze`
#[derive(Debug, Default)]
pub struct AnalyzeUpload<'a> {
    pub audio: Option<&'a [u8]>,
    pub word: Option<&'a str>,
}

impl<'a> AnalyzeUpload<'a> {
    pub fn new(audio: &'a [u8], word: &'a str) -> Self {
        Self {
            audio: Some(audio),
            word: Some(word),
        }
    }

    pub fn body(&self) -> Vec<u8> {
        let mut body = Vec::new();

        if let Some(word) = self.word {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            body.extend_from_slice(b"Content-Disposition: form-data; name=\"word\"\r\n\r\n");
            body.extend_from_slice(word.as_bytes());
            body.extend_from_slice(b"\r\n");
        }

        if let Some(audio) = self.audio {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            body.extend_from_slice(
                b"Content-Disposition: form-data; name=\"file\"; filename=\"recording.wav\"\r\n",
            );
            body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
            body.extend_from_slice(audio);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    pub fn request(&self) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(self.body()))
            .unwrap()
    }
}
