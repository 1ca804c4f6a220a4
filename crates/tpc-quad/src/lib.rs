//! tpc-quad — quaternion generation with backpatching.
//!
//! The hard part of the pipeline (spec.md §1): lowers the AST `tpc-par`
//! produces into a linear, position-addressed vector of four-field
//! quaternions, resolving jump targets inside short-circuit boolean
//! conditions and structured control statements via the classic
//! truelist/falselist backpatch technique.

mod error;
mod quad;
mod quaternizer;

pub use error::QuaternizerError;
pub use quad::{ArithOp, Quaternion, RelOp};
pub use quaternizer::{generate, Quaternizer};
