//! Trace form fields, their defaults, and request construction.
//!
//! DESIGN
//! ======
//! Field values are held exactly as typed (the page input stays free text so
//! partial edits never fight the user); trimming and page parsing happen
//! when a request is built, which is also what the wire carries.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{PreviewRequest, TraceRequest};

/// Model applied when the user leaves the selector untouched.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Models offered by the selector, default first.
pub const MODEL_CHOICES: &[&str] = &[
    "gemini-2.0-flash-lite",
    "gemini-2.0-flash",
    "gemini-2.5-flash",
];

/// Everything the user types into the trace form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceForm {
    pub pdf_path: String,
    pub api_key: String,
    /// Raw page input text; see [`parse_page`].
    pub page: String,
    pub model: String,
    pub from_token: String,
    pub to_token: String,
}

impl Default for TraceForm {
    fn default() -> Self {
        Self {
            pdf_path: String::new(),
            api_key: String::new(),
            page: "1".to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            from_token: String::new(),
            to_token: String::new(),
        }
    }
}

impl TraceForm {
    /// Reset every field to its default (the Clear action).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Page number as sent on the wire; blank or invalid input falls back
    /// to page 1.
    #[must_use]
    pub fn page_number(&self) -> u32 {
        parse_page(&self.page)
    }

    /// Preview request built from the current fields, trimmed the way the
    /// wire carries them.
    #[must_use]
    pub fn preview_request(&self) -> PreviewRequest {
        PreviewRequest {
            pdf_path: self.pdf_path.trim().to_owned(),
            page: self.page_number(),
        }
    }

    /// Trace request built from the current fields, trimmed the way the
    /// wire carries them. The model string passes through untouched.
    #[must_use]
    pub fn trace_request(&self) -> TraceRequest {
        TraceRequest {
            pdf_path: self.pdf_path.trim().to_owned(),
            api_key: self.api_key.trim().to_owned(),
            page: self.page_number(),
            model: self.model.clone(),
            from_token: self.from_token.trim().to_owned(),
            to_token: self.to_token.trim().to_owned(),
        }
    }
}

/// Parses the free-text page input. Blank, non-numeric, and zero input all
/// fall back to 1 (pages are 1-based).
#[must_use]
pub fn parse_page(input: &str) -> u32 {
    input.trim().parse::<u32>().ok().filter(|page| *page >= 1).unwrap_or(1)
}
