//! Business-card field extraction module.

mod parser;
pub mod rules;

pub use parser::{CardFieldExtractor, CardParser, ExtractionResult};
