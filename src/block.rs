use std::fmt;

use crate::{BlockError, Padding};
use crate::display::display_fn;
use crate::lines::{
    indent_width, is_blank, split_segments, strip_continuation, strip_indent, trim_line_end,
};


/// The cleaned content lines of a text block.
///
/// The first segment of the input (everything up to the first line terminator)
/// and the last segment (everything after the final terminator) are never part
/// of the block. All other lines have the common indentation, trailing
/// whitespace and trailing `|` sentinels removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'src> {
    lines: Vec<&'src str>,
    common_indent: usize,
}

impl<'src> Block<'src> {
    /// Fails when no line outside the first segment contains anything but
    /// spaces and tabs.
    pub fn parse(content: &'src str) -> Result<Self, BlockError> {
        let mut segments: Vec<&'src str> = split_segments(content).skip(1).collect();

        let Some(common_indent) = segments.iter()
            .filter(|line| ! is_blank(line))
            .map(|line| indent_width(line))
            .min()
        else {
            tracing::debug!(segments = segments.len(), "no determinable block indentation");
            return Err(BlockError::EmptyContent);
        };

        for line in &mut segments {
            *line = trim_line_end(strip_indent(*line, common_indent));
        }
        segments.pop();

        tracing::trace!(common_indent, lines = segments.len(), "parsed text block");
        Ok(Self { lines: segments, common_indent })
    }

    pub fn lines(&self) -> &[&'src str] {
        &self.lines
    }

    /// Indentation width removed from every line.
    pub fn common_indent(&self) -> usize {
        self.common_indent
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines, honoring continuation markers, and applies `padding`.
    pub fn render(&self, padding: Padding) -> String {
        let Some((first, rest)) = self.lines.split_first() else {
            return String::new();
        };
        let prefix = padding.prefix().to_string();
        let mut joined = String::from(*first);
        for line in rest {
            if let Some(kept) = strip_continuation(&joined).map(str::len) {
                joined.truncate(kept);
            } else {
                joined.push('\n');
                joined.push_str(&prefix);
            }
            joined.push_str(line);
        }
        if padding.pads_first_line() {
            joined.insert_str(0, &prefix);
        }
        joined
    }

    pub fn display(&self, padding: Padding) -> impl fmt::Display + '_ {
        display_fn(move |f| f.write_str(&self.render(padding)))
    }
}

/// Normalizes a text block without re-applying any indentation.
///
/// The first line (usually empty, following the opening quote) and the last
/// line (usually only the indentation in front of the closing quote) are
/// dropped.
///
/// # Examples
///
/// ```rust
/// use text_block::normalize;
/// assert_eq!(
///     normalize("
///         fn main() {
///             run();   |
///         }
///     "),
///     "fn main() {\n    run();   \n}"
/// );
/// ```
pub fn normalize(content: &str) -> String {
    normalize_padded(content, Padding::none())
}

/// Normalizes a text block and pads every line with `indent` copies of
/// `indent_char`.
///
/// # Examples
///
/// ```rust
/// use text_block::normalize_with;
/// assert_eq!(
///     normalize_with("
///         one \\
///         two
///         three
///     ", 1, '>'),
///     ">one two\n>three"
/// );
/// ```
pub fn normalize_with(content: &str, indent: usize, indent_char: char) -> String {
    normalize_padded(content, Padding::new(indent, indent_char))
}

/// Normalizes a text block and indents it by four spaces.
pub fn normalize_nested(content: &str) -> String {
    normalize_padded(content, Padding::nested())
}

/// Normalizes a text block with arbitrary padding.
///
/// Blocks without any non-blank line normalize to an empty string.
pub fn normalize_padded(content: &str, padding: Padding) -> String {
    try_normalize(content, padding).unwrap_or_default()
}

/// Like [`normalize_padded`], but rejects blocks without a non-blank line.
pub fn try_normalize(content: &str, padding: Padding) -> Result<String, BlockError> {
    Block::parse(content).map(|block| block.render(padding))
}
