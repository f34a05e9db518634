//! Core library for business-card contact extraction.
//!
//! This crate provides:
//! - Rule-based extraction of contact fields (company, person name, email,
//!   phone, city, postal code) from raw OCR transcriptions
//! - Contact data models ready for form prefill
//! - The card-scan workflow: data-URL validation, text detection seam and
//!   the "nothing extracted" policy

pub mod card;
pub mod error;
pub mod models;
pub mod scan;

pub use card::{CardFieldExtractor, CardParser, ExtractionResult};
pub use error::{CardscanError, Result, ScanError};
pub use models::config::CardscanConfig;
pub use models::contact::{CardAddress, ContactCandidate, ScannedCard};
pub use scan::{ScanWorkflow, TextDetector, TranscriptDetector};
