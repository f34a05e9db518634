//! Rule-based field extractors for business cards.

pub mod address;
pub mod company;
pub mod email;
pub mod name;
pub mod patterns;
pub mod phone;

pub use address::{extract_location, Location, LocationExtractor};
pub use company::{extract_company, CompanyExtractor};
pub use email::{extract_email, EmailExtractor};
pub use name::{extract_person_name, PersonNameExtractor};
pub use phone::{extract_phone, normalize_phone, PhoneExtractor};

/// Trait for field extractors.
///
/// Matches come back in the order the rule prefers them: document order,
/// with earlier tiers of a tiered rule ahead of later ones.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the preferred occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched field value with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub position: Option<(usize, usize)>,
    /// Zero-based line index, for line rules.
    pub line: Option<usize>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            line: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// One line of a transcription.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardLine<'a> {
    pub index: usize,
    pub start: usize,
    pub text: &'a str,
}

impl CardLine<'_> {
    /// Byte span of the whole line in the source text.
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.start + self.text.len())
    }

    /// Wrap a value matched on this whole line.
    pub fn matched<T>(&self, value: T) -> ExtractionMatch<T> {
        let (start, end) = self.span();
        ExtractionMatch::new(value, self.text)
            .with_position(start, end)
            .with_line(self.index)
    }
}

/// Split text into lines on `\n`, dropping a trailing `\r`, keeping byte offsets.
pub(crate) fn card_lines(text: &str) -> impl Iterator<Item = CardLine<'_>> {
    let mut offset = 0;
    text.split_inclusive('\n').enumerate().map(move |(index, raw)| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        CardLine { index, start, text: line }
    })
}

/// True if the text contains an ASCII uppercase letter.
pub(crate) fn has_uppercase(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
}

/// True if the text contains no lowercase letter.
pub(crate) fn has_no_lowercase(text: &str) -> bool {
    !text.chars().any(char::is_lowercase)
}
