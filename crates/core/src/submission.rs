//! Submission validation.
//!
//! Validation is a sequence of short-circuiting gates. The presence check
//! runs first, then (for event submissions) the caller resolves the event and
//! checks that it is open, and the word count check runs last:
//!
//! 1. [`SubmissionForm::require_fields`]
//! 2. event lookup by slug (storage layer)
//! 3. [`crate::event::ensure_accepting_submissions`]
//! 4. [`check_word_count`]

use serde::Deserialize;

use crate::error::CoreError;
use crate::words::count_words;

/// Raw submission fields as received from a form or JSON body.
///
/// Missing fields deserialize to empty strings so that they fail the
/// presence check with [`CoreError::MissingFields`] rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub blog: String,
}

/// Submission fields after trimming, all guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blog: String,
}

/// A submission that passed every gate and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blog: String,
    pub word_count: usize,
}

impl SubmissionForm {
    /// Trim every field and require all of them to be non-empty.
    pub fn require_fields(&self) -> Result<SubmissionFields, CoreError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let blog = self.blog.trim();

        if name.is_empty() || email.is_empty() || phone.is_empty() || blog.is_empty() {
            return Err(CoreError::MissingFields);
        }

        Ok(SubmissionFields {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            blog: blog.to_string(),
        })
    }
}

impl SubmissionFields {
    /// Apply the word count gate against `min_words` and attach the count.
    pub fn accept(self, min_words: i32) -> Result<AcceptedSubmission, CoreError> {
        let word_count = check_word_count(&self.blog, min_words)?;
        Ok(AcceptedSubmission {
            name: self.name,
            email: self.email,
            phone: self.phone,
            blog: self.blog,
            word_count,
        })
    }
}

/// Count the words of `blog` and require at least `min_words` of them.
///
/// Returns the count on success. A non-positive minimum accepts any text.
pub fn check_word_count(blog: &str, min_words: i32) -> Result<usize, CoreError> {
    let required = usize::try_from(min_words).unwrap_or(0);
    let count = count_words(blog);
    if count < required {
        return Err(CoreError::InsufficientWords { count, required });
    }
    Ok(count)
}
