//! Word counting for blog submissions.
//!
//! The server-side count is authoritative. Client previews must use the same
//! algorithm (or call `GET /api/words/count`) so the numbers agree.

use serde::Serialize;

/// Count the words in `text`.
///
/// Leading and trailing whitespace is ignored and any run of (Unicode)
/// whitespace separates two words. Empty or whitespace-only input has zero
/// words.
///
/// # Examples
///
/// ```
/// use contest_core::words::count_words;
///
/// assert_eq!(count_words(""), 0);
/// assert_eq!(count_words("   "), 0);
/// assert_eq!(count_words("  hello   world \n"), 2);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Progress of a word count towards a required minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCountBand {
    /// Under 60% of the minimum.
    Below,
    /// At least 60% of the minimum but not yet there.
    Approaching,
    /// Minimum reached.
    Met,
}

impl WordCountBand {
    /// Classify `count` against `required`.
    pub fn classify(count: usize, required: usize) -> Self {
        if count >= required {
            Self::Met
        } else if count.saturating_mul(5) >= required.saturating_mul(3) {
            Self::Approaching
        } else {
            Self::Below
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn whitespace_only_has_no_words() {
        assert_eq!(count_words(" \t\n\r  "), 0);
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(count_words("one  two\t\tthree\n\nfour"), 4);
    }

    #[test]
    fn count_ignores_surrounding_whitespace() {
        let samples = ["a b c", "  a b c", "a b c  ", "\n a b c \t"];
        for text in samples {
            assert_eq!(count_words(text), count_words(text.trim()), "{text:?}");
        }
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(count_words("hello, world! it's fine."), 4);
    }

    #[test]
    fn unicode_whitespace_separates_words() {
        // U+00A0 NO-BREAK SPACE and U+2003 EM SPACE
        assert_eq!(count_words("alpha\u{00A0}beta\u{2003}gamma"), 3);
    }

    #[test]
    fn repeated_word_template() {
        assert_eq!(count_words(&"word ".repeat(250)), 250);
        assert_eq!(count_words(&"word ".repeat(249)), 249);
    }

    #[test]
    fn band_thresholds_for_default_minimum() {
        assert_eq!(WordCountBand::classify(0, 250), WordCountBand::Below);
        assert_eq!(WordCountBand::classify(149, 250), WordCountBand::Below);
        assert_eq!(WordCountBand::classify(150, 250), WordCountBand::Approaching);
        assert_eq!(WordCountBand::classify(249, 250), WordCountBand::Approaching);
        assert_eq!(WordCountBand::classify(250, 250), WordCountBand::Met);
        assert_eq!(WordCountBand::classify(1000, 250), WordCountBand::Met);
    }

    #[test]
    fn band_does_not_overflow_on_huge_minimum() {
        assert_eq!(WordCountBand::classify(1, usize::MAX), WordCountBand::Below);
        assert_eq!(
            WordCountBand::classify(usize::MAX - 1, usize::MAX),
            WordCountBand::Approaching
        );
        assert_eq!(WordCountBand::classify(usize::MAX, usize::MAX), WordCountBand::Met);
    }
}
