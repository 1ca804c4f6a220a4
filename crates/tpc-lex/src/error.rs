use thiserror::Error;

use tpc_util::Span;

/// Lexical errors. The lexer has no recovery strategy: the first bad
/// character aborts the stage, per spec.md §4.1/§7.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("{span}: unexpected character '{character}'")]
    UnexpectedCharacter { span: Span, character: char },

    #[error("{span}: integer literal '{text}' does not fit in a 32-bit signed integer")]
    IntegerOverflow { span: Span, text: String },
}
