// Main-content extraction on top of rs-trafilatura.
//
// The backend does the content detection. Around it sit the checks it does
// not make: element limits, the nesting guard, and telling "failed" apart
// from "there was nothing to extract".

use std::borrow::Cow;

use crate::dom::{count_elements, has_visible_text, parse_html, to_html, truncate_depth, MAX_DEPTH};
use crate::error::ExtractError;
use crate::text::normalize_whitespace;
use crate::{ContentExtractor, Options};

/// The built-in extraction capability.
///
/// Construction validates the options; a rejected configuration is what the
/// adapter reports as an unavailable capability.
#[derive(Debug, Clone)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    pub fn new(options: &Options) -> Result<Self, ExtractError> {
        if options.favor_precision && options.favor_recall {
            return Err(ExtractError::InvalidOptions(
                "favor_precision and favor_recall are mutually exclusive".to_string(),
            ));
        }
        if options.max_elements == Some(0) {
            return Err(ExtractError::InvalidOptions(
                "max_elements must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            options: options.clone(),
        })
    }

    fn backend_options(&self) -> rs_trafilatura::Options {
        rs_trafilatura::Options {
            include_comments: self.options.include_comments,
            include_tables: self.options.include_tables,
            favor_precision: self.options.favor_precision,
            favor_recall: self.options.favor_recall,
            ..rs_trafilatura::Options::default()
        }
    }
}

impl ContentExtractor for Extractor {
    fn extract(&self, html: &str) -> Result<Option<String>, ExtractError> {
        let dom = parse_html(html);

        if let Some(limit) = self.options.max_elements {
            let count = count_elements(&dom.document);
            if count > limit {
                return Err(ExtractError::TooManyElements { count, limit });
            }
        }

        let html: Cow<'_, str> = if truncate_depth(&dom.document, MAX_DEPTH) {
            debug!(max_depth = MAX_DEPTH, "dropped over-nested content");
            Cow::Owned(to_html(&dom)?)
        } else {
            Cow::Borrowed(html)
        };

        match rs_trafilatura::extract_with_options(&html, &self.backend_options()) {
            Ok(result) => {
                let text = normalize_whitespace(&result.content_text);
                debug!(chars = text.len(), "extracted main content");
                Ok((!text.is_empty()).then_some(text))
            }
            // Nothing readable to begin with is not a failure.
            Err(_) if !has_visible_text(&dom.document) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
