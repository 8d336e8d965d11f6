//! Provider error-message classification.
//!
//! Providers report failures as free-form text, so classification is
//! case-insensitive substring matching over an explicit rule table. The
//! matching lives behind [`ErrorClassifier`] so the rules can be updated or
//! swapped per provider without touching the dispatcher.

use crate::error::ErrorKind;

/// Maps a provider failure message to an [`ErrorKind`].
pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, message: &str) -> ErrorKind;
}

/// Ordered substring rules; the first matching pattern wins.
///
/// "rate limit" is checked before the quota patterns because quota wording
/// ("limit") would otherwise shadow it.
const RULES: &[(&[&str], ErrorKind)] = &[
    (&["rate limit"], ErrorKind::RateLimit),
    (
        &["api key", "unauthorized", "forbidden", "missing"],
        ErrorKind::Auth,
    ),
    (&["quota", "limit"], ErrorKind::Quota),
    (&["model"], ErrorKind::Model),
];

/// Substring-based classifier for Gemini-style error messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringClassifier;

impl ErrorClassifier for SubstringClassifier {
    fn classify(&self, message: &str) -> ErrorKind {
        let message = message.to_lowercase();
        for (patterns, kind) in RULES {
            if patterns.iter().any(|p| message.contains(p)) {
                return *kind;
            }
        }
        ErrorKind::Unknown
    }
}
