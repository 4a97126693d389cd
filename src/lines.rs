//! Line level primitives of the block normalizer.


/// Trailing marker that fences off whitespace which would otherwise be trimmed.
pub const SENTINEL: char = '|';

/// Trailing marker joining a line with the next one.
pub const CONTINUATION: char = '\\';

/// Only spaces and tabs count as indentation.
pub fn is_indent_char(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_indent_char)
}

/// Number of leading space or tab characters.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| is_indent_char(*c)).count()
}

/// Splits on `\n`, dropping a `\r` directly in front of each terminator.
///
/// Unlike [`str::lines`], a trailing terminator yields a final empty segment.
pub(crate) fn split_segments(content: &str) -> impl Iterator<Item = &str> + '_ {
    content.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Strips `width` leading characters when the line starts with that many
/// spaces or that many tabs. Any other prefix loses all of its indentation.
pub(crate) fn strip_indent(line: &str, width: usize) -> &str {
    for c in [' ', '\t'] {
        if let Some(rest) = strip_repeated(line, c, width) {
            return rest;
        }
    }
    tracing::trace!(line, width, "inconsistent indentation, stripping all of it");
    line.trim_start_matches(is_indent_char)
}

fn strip_repeated(line: &str, c: char, count: usize) -> Option<&str> {
    let mut rest = line;
    for _ in 0..count {
        rest = rest.strip_prefix(c)?;
    }
    Some(rest)
}

/// Trims trailing whitespace first, then any trailing sentinels.
///
/// Any Unicode whitespace counts here, not only indentation characters.
pub(crate) fn trim_line_end(line: &str) -> &str {
    line.trim_end().trim_end_matches(SENTINEL)
}

/// Removes a single trailing continuation marker.
///
/// An escaped marker (`\\`) at the end of the text is not a continuation.
pub(crate) fn strip_continuation(text: &str) -> Option<&str> {
    let rest = text.strip_suffix(CONTINUATION)?;
    (! rest.ends_with(CONTINUATION)).then_some(rest)
}
