use text_block::{Block, BlockError, Padding};


#[test]
fn parsed_lines() {
    let block = Block::parse("\n    a  \n      b|\n\n    ").unwrap();
    assert_eq!(block.lines(), ["a", "  b", ""]);
    assert_eq!(block.common_indent(), 4);
    assert!(! block.is_empty());
    assert_eq!(block.render(Padding::none()), "a\n  b\n");
    assert_eq!(block.display(Padding::spaces(1)).to_string(), " a\n   b\n ");
}

#[test]
fn closing_segment_only() {
    let block = Block::parse("\n  x").unwrap();
    assert!(block.is_empty());
    assert_eq!(block.common_indent(), 2);
    assert_eq!(block.render(Padding::nested()), "");
}

#[test]
fn blank_blocks() {
    assert_eq!(Block::parse(""), Err(BlockError::EmptyContent));
    assert_eq!(Block::parse("\n \t \n   "), Err(BlockError::EmptyContent));
}
