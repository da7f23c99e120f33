/// Errors reported by the rules core.
///
/// All of them are raised before any state is mutated, so a `Position`
/// is never left half-updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    /// Position or move text with the wrong length or an unknown character.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A move that is not legal for the side to move, or a pass while moves exist.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A color token other than `X` or `O`.
    #[error("invalid color token: {0:?}")]
    InvalidColorToken(String),
}

pub type Result<T> = std::result::Result<T, OthelloError>;
