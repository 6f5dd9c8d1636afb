// this_file: backends/bannerkit-core/src/utils.rs

//! Text helpers shared by the font loader and the renderer.

use std::borrow::Cow;

/// Convert `\r\n` and bare `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Normalise line endings and split into lines.
///
/// Empty input yields a single empty line; a trailing `\n` yields a trailing
/// empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .split('\n')
        .map(str::to_owned)
        .collect()
}
