#![allow(unused)]

/// Embeds `lines` in a literal-like block: an empty first segment, every line
/// indented by `depth` copies of `indent_char`, and a closing segment holding
/// only that indentation.
pub fn wrap_with<'a, I>(lines: I, depth: usize, indent_char: char) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix: String = std::iter::repeat(indent_char).take(depth).collect();
    let mut block = String::from("\n");
    for line in lines {
        block.push_str(&prefix);
        block.push_str(line);
        block.push('\n');
    }
    block.push_str(&prefix);
    block
}

pub fn wrap<'a, I>(lines: I, depth: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    wrap_with(lines, depth, ' ')
}
