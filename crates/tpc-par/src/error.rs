use thiserror::Error;
use tpc_util::Span;

/// Errors raised while parsing a token stream into an AST. The parser has
/// no recovery strategy: the first error aborts the stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{span}: unexpected token, expected {expected} but found '{found}'")]
    UnexpectedToken {
        span: Span,
        expected: String,
        found: String,
    },

    #[error("{span}: identifier '{name}' was not declared in a VAR section")]
    UndeclaredIdentifier { span: Span, name: String },

    #[error("{span}: '{name}' is already declared")]
    DuplicateDeclaration { span: Span, name: String },

    #[error("{span}: unexpected end of input, expected {expected}")]
    UnexpectedEof { span: Span, expected: String },
}
