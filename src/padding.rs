use std::fmt;

use crate::display::repeat_char;


/// Indentation width used by [`normalize_nested`](crate::normalize_nested).
pub const NESTED_INDENT: usize = 4;

/// Which output lines receive padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Every line, including the first.
    #[default]
    Full,
    /// Every line after the first.
    Hanging,
}

/// Indentation re-applied to a normalized block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    indent: usize,
    indent_char: char,
    placement: Placement,
}

impl Default for Padding {
    fn default() -> Self {
        Self::none()
    }
}

impl Padding {
    pub fn new(indent: usize, indent_char: char) -> Self {
        Self { indent, indent_char, placement: Placement::Full }
    }

    pub fn none() -> Self {
        Self::spaces(0)
    }

    pub fn spaces(indent: usize) -> Self {
        Self::new(indent, ' ')
    }

    pub fn tabs(indent: usize) -> Self {
        Self::new(indent, '\t')
    }

    pub fn nested() -> Self {
        Self::spaces(NESTED_INDENT)
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Leaves the first line unpadded.
    #[must_use]
    pub fn hanging(self) -> Self {
        self.with_placement(Placement::Hanging)
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn indent_char(&self) -> char {
        self.indent_char
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_none(&self) -> bool {
        self.indent == 0
    }

    /// The padding prefix of a single line.
    pub fn prefix(&self) -> impl fmt::Display {
        repeat_char(self.indent_char, self.indent)
    }

    pub(crate) fn pads_first_line(&self) -> bool {
        self.placement == Placement::Full
    }
}
