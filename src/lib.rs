//! Normalization of indented multi-line text blocks.
//!
//! A block is usually a string literal nested inside indented source code.
//! Normalizing it removes the shared indentation, trims every line and
//! re-applies the requested [`Padding`]. Two lexical markers are recognized at
//! the end of a line: `|` preserves the whitespace in front of it, and a
//! single `\` joins the line with the next one.

pub use block::*;
pub use error::*;
pub use lines::{is_blank, indent_width, is_indent_char, SENTINEL, CONTINUATION};
pub use padding::*;


mod display;
mod block;
mod error;
mod lines;
mod padding;
