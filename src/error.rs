/// Failures of the strict [`try_normalize`](crate::try_normalize) entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BlockError {
    #[error("block contains no non-blank lines")]
    EmptyContent,
}
