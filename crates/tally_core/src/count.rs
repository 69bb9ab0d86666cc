use std::borrow::Cow;

pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str, token: &str) -> u64;
}

/// Literal substring matching, non-overlapping and scanned left to right.
///
/// `"aa"` occurs once in `"aaa"`. No word boundaries are considered.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringCounter;

impl TokenCounter for SubstringCounter {
    fn count(&self, text: &str, token: &str) -> u64 {
        if token.is_empty() {
            return 0;
        }
        text.matches(token).count() as u64
    }
}

/// Delete line breaks so a token split across lines joins back together.
///
/// `\r` is removed alongside `\n`: text read with universal newlines sees
/// `\r\n` and a lone `\r` as a single `\n`.
pub fn strip_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}
