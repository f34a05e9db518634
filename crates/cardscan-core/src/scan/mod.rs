//! Card-scan workflow: image intake, text detection and extraction.

mod data_url;
mod workflow;

pub use data_url::{decode_data_url, encode_data_url, DecodedImage};
pub use workflow::ScanWorkflow;

use crate::error::ScanError;

/// Text detection over a card image.
///
/// Implementations wrap an OCR service. `Ok(None)` means the service ran
/// but reported no text.
pub trait TextDetector {
    /// Detect the text printed on the image.
    fn detect_text(&self, image: &[u8]) -> Result<Option<String>, ScanError>;
}

/// Detector that returns a transcription produced ahead of time.
#[derive(Debug, Clone, Default)]
pub struct TranscriptDetector {
    transcript: Option<String>,
}

impl TranscriptDetector {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
        }
    }

    /// A detector that never finds text.
    pub fn empty() -> Self {
        Self { transcript: None }
    }
}

impl TextDetector for TranscriptDetector {
    fn detect_text(&self, _image: &[u8]) -> Result<Option<String>, ScanError> {
        Ok(self.transcript.clone())
    }
}
