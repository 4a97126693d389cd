use text_block::{try_normalize, BlockError, Padding};


#[test]
fn empty_content() {
    let error = try_normalize("", Padding::none()).unwrap_err();
    assert_eq!(error, BlockError::EmptyContent);
    assert_eq!(error.to_string(), "block contains no non-blank lines");

    assert_eq!(try_normalize("single line", Padding::none()), Err(BlockError::EmptyContent));
    assert_eq!(try_normalize("\n  \n\t\n", Padding::spaces(2)), Err(BlockError::EmptyContent));
}

#[test]
fn valid_content() {
    assert_eq!(try_normalize("\n  a\n  ", Padding::spaces(1)), Ok(String::from(" a")));
    assert_eq!(try_normalize("\n  x", Padding::none()), Ok(String::new()));
}
