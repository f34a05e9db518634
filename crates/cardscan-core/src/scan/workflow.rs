//! Scan a card image into a contact ready for form prefill.

use tracing::{debug, info, warn};

use crate::card::CardFieldExtractor;
use crate::error::ScanError;
use crate::models::config::CardscanConfig;
use crate::models::contact::ScannedCard;

use super::{decode_data_url, TextDetector};

/// Runs an image through text detection and field extraction.
pub struct ScanWorkflow<D> {
    detector: D,
    extractor: CardFieldExtractor,
    max_image_bytes: usize,
    require_core_fields: bool,
}

impl<D: TextDetector> ScanWorkflow<D> {
    /// Create a workflow with default settings.
    pub fn new(detector: D) -> Self {
        Self::with_config(detector, &CardscanConfig::default())
    }

    /// Create a workflow from configuration.
    pub fn with_config(detector: D, config: &CardscanConfig) -> Self {
        Self {
            detector,
            extractor: CardFieldExtractor::with_config(config.extraction.clone()),
            max_image_bytes: config.scan.max_image_bytes,
            require_core_fields: config.scan.require_core_fields,
        }
    }

    /// Scan a `data:image/...;base64,...` URL.
    ///
    /// The URL is echoed back in [`ScannedCard::card_image`].
    pub fn scan(&self, image: &str) -> Result<ScannedCard, ScanError> {
        if image.is_empty() {
            warn!("No image received");
            return Err(ScanError::MissingImage);
        }

        let decoded = decode_data_url(image).inspect_err(|e| warn!("Rejected image: {}", e))?;
        debug!(
            "Decoded {} image of {} bytes",
            decoded.media_type,
            decoded.bytes.len()
        );

        if decoded.bytes.len() > self.max_image_bytes {
            return Err(ScanError::ImageTooLarge {
                size: decoded.bytes.len(),
                max: self.max_image_bytes,
            });
        }

        let text = self
            .detector
            .detect_text(&decoded.bytes)?
            .filter(|text| !text.trim().is_empty())
            .ok_or(ScanError::NoTextDetected)?;
        debug!("Detected text: {:?}", text);

        let contact = self.extractor.extract(&text);
        info!("Extracted card fields: {:?}", contact.found_fields());

        if self.require_core_fields && contact.lacks_core_fields() {
            return Err(ScanError::NothingExtracted);
        }

        Ok(ScannedCard::from_candidate(contact, Some(image.to_string())))
    }
}
