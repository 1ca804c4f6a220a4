use thiserror::Error;

use tpc_par::BinOp;

/// Errors raised while lowering an AST into quaternions. There is no
/// partial recovery: the first unsupported shape aborts the stage, per
/// spec.md §4.3/§7.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuaternizerError {
    #[error("'{operator:?}' is not a valid arithmetic operator")]
    NonArithmeticOperator { operator: BinOp },

    #[error("'{operator:?}' is not a valid relational operator")]
    NonRelationalOperator { operator: BinOp },

    #[error("a condition must be a relational or boolean expression, found {description}")]
    UnsupportedCondition { description: String },
}
