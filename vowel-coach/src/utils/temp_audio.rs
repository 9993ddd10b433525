//! Scoped temporary storage for uploaded audio
//!
//! The transcription client and the duration decoder both read the upload
//! from disk. The file lives exactly as long as its [`TemporaryAudioFile`]
//! handle: dropping the handle (normal return, `?` early exit, panic unwind
//! or a cancelled request future) deletes it.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const TEMP_PREFIX: &str = "vowel_";
const TEMP_SUFFIX: &str = ".wav";

/// Uploaded audio persisted to a uniquely named temp file
#[derive(Debug)]
pub struct TemporaryAudioFile {
    file: NamedTempFile,
}

impl TemporaryAudioFile {
    /// Write `audio` to a new temp file inside `dir`
    pub fn create_in(dir: &Path, audio: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)?;
        file.write_all(audio)?;
        file.flush()?;

        tracing::debug!(
            path = %file.path().display(),
            bytes = audio.len(),
            "Stored uploaded audio"
        );

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the file now and report failure
    ///
    /// Dropping the handle also deletes it but swallows errors.
    pub fn release(self) -> io::Result<()> {
        let path = self.file.path().to_path_buf();
        self.file.close()?;
        tracing::debug!(path = %path.display(), "Released temporary audio file");
        Ok(())
    }
}
