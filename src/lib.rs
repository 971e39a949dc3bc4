// html-main-text — main-content text extraction from HTML.
//
// Architecture:
//   HTML string → html5ever parse (limits, nesting guard) → rs-trafilatura → normalized text
//
// The `adapter` module wraps the extractor in the stdin → JSON contract used by
// the `extract` binary: one JSON object on stdout, errors carried as data.

// Logging is optional; with the `tracing` feature off these expand to nothing.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod adapter;
mod dom;
mod error;
mod extract;
pub mod text;

pub use adapter::{FailureKind, Outcome};
pub use error::ExtractError;
pub use extract::Extractor;

/// Extraction options.
///
/// The defaults are what the `extract` binary runs with: comment sections and
/// tables are left out, balanced precision/recall, no element limit.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Keep user comment sections (`#comments`, `.comment-list`, ...).
    pub include_comments: bool,
    /// Keep table content.
    pub include_tables: bool,
    /// Prefer leaving text out over letting boilerplate in.
    pub favor_precision: bool,
    /// Prefer keeping borderline text. Cannot be combined with `favor_precision`.
    pub favor_recall: bool,
    /// Refuse documents with more elements than this.
    pub max_elements: Option<usize>,
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether comment sections are kept.
    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    /// Set whether tables are kept.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.include_tables = include;
        self
    }

    /// Set whether extraction leans towards precision.
    pub fn with_favor_precision(mut self, favor: bool) -> Self {
        self.favor_precision = favor;
        self
    }

    /// Set whether extraction leans towards recall.
    pub fn with_favor_recall(mut self, favor: bool) -> Self {
        self.favor_recall = favor;
        self
    }

    /// Set the maximum number of elements a document may have.
    pub fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = Some(limit);
        self
    }
}

/// A main-content extraction capability.
///
/// `Ok(None)` means the document was processed but held no usable text.
pub trait ContentExtractor {
    fn extract(&self, html: &str) -> Result<Option<String>, ExtractError>;
}

/// Extract the main text of an HTML document using default options.
///
/// # Examples
///
/// ```
/// let html = "<html><body><article><p>Hello, world! This is the article, \
///             long enough to count as the main content of the page.</p></article></body></html>";
/// let text = html_main_text::extract(html).unwrap().unwrap();
/// assert!(text.contains("Hello, world! This is the article"));
/// ```
pub fn extract(html: &str) -> Result<Option<String>, ExtractError> {
    extract_with(html, &Options::default())
}

/// Extract the main text of an HTML document with custom options.
///
/// # Examples
///
/// ```
/// use html_main_text::{extract_with, Options};
///
/// let options = Options::new().with_tables(true).with_favor_recall(true);
/// let result = extract_with("<html><body></body></html>", &options).unwrap();
/// assert_eq!(result, None);
/// ```
pub fn extract_with(html: &str, options: &Options) -> Result<Option<String>, ExtractError> {
    Extractor::new(options)?.extract(html)
}

/// Extract from raw bytes, decoding them as UTF-8 with invalid sequences
/// replaced by U+FFFD.
pub fn extract_bytes(html: &[u8]) -> Result<Option<String>, ExtractError> {
    extract(&String::from_utf8_lossy(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty() {
        assert_eq!(extract("").unwrap(), None);
    }

    #[test]
    fn test_extract_with_rejects_conflicting_options() {
        let options = Options::new().with_favor_precision(true).with_favor_recall(true);
        assert!(matches!(
            extract_with("<p>x</p>", &options),
            Err(ExtractError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_options_builder() {
        let options = Options::new()
            .with_comments(true)
            .with_tables(true)
            .with_favor_precision(true)
            .with_max_elements(100);

        assert!(options.include_comments);
        assert!(options.include_tables);
        assert!(options.favor_precision);
        assert!(!options.favor_recall);
        assert_eq!(options.max_elements, Some(100));
    }

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(!options.include_comments);
        assert!(!options.include_tables);
        assert!(!options.favor_precision);
        assert!(!options.favor_recall);
        assert_eq!(options.max_elements, None);
    }

    #[test]
    fn test_extract_bytes_lossy() {
        let html = b"<html><body><article><p>The caf\xff au lait at the corner bakery \
            has been the best in town for as long as anyone can remember.</p></article></body></html>";
        let text = extract_bytes(html).unwrap().unwrap();
        assert!(text.contains("caf\u{fffd} au lait"), "{text}");
    }
}
