use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the driver itself, as distinct from the three
/// pipeline stages it wires together. The stage errors (`LexError`,
/// `ParseError`, `QuaternizerError`) already carry their own `Span`; this
/// enum only adds what the driver knows that they don't — which file was
/// being read, or that it failed before any stage even started.
#[derive(Error, Debug)]
pub enum DrvError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] tpc_lex::LexError),

    #[error(transparent)]
    Parse(#[from] tpc_par::ParseError),

    #[error(transparent)]
    Quaternizer(#[from] tpc_quad::QuaternizerError),
}
