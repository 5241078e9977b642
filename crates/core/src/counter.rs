use alloc::borrow::Cow;
use core::str::Utf8Error;

use crate::metric::Metric;

/// Compute `metric` over the raw content of a file.
///
/// [`Metric::ByteCount`] works on the bytes as-is; every other metric decodes the
/// content as UTF-8 first, fails if it is not valid text, and sees line endings
/// normalized by [`normalize_newlines`].
///
/// # Errors
///
/// Returns the decode error for textual metrics on non-UTF-8 input.
pub fn measure(metric: Metric, input: &[u8]) -> Result<usize, Utf8Error> {
    if !metric.is_textual() {
        return Ok(count_bytes(input));
    }

    let normalized = normalize_newlines(core::str::from_utf8(input)?);
    let text: &str = &normalized;
    Ok(match metric {
        Metric::LineCount => count_newlines(text),
        Metric::WordCount => count_words(text),
        Metric::CharCount => count_chars(text),
        Metric::MaxLineLength => max_line_length(text),
        Metric::ByteCount => count_bytes(input),
    })
}

/// Text-mode line endings: `\r\n` and a lone `\r` both become `\n`.
#[must_use]
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Number of `\n` characters. A trailing line without a newline is not counted.
#[must_use]
pub fn count_newlines(text: &str) -> usize {
    bytecount::count(text.as_bytes(), b'\n')
}

#[must_use]
pub const fn count_bytes(input: &[u8]) -> usize {
    input.len()
}

/// Number of code points.
#[must_use]
pub fn count_chars(text: &str) -> usize {
    bytecount::num_chars(text.as_bytes())
}

/// Number of maximal runs of non-whitespace characters.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Longest line in code points, with only the terminating `\n` removed.
#[must_use]
pub fn max_line_length(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}
