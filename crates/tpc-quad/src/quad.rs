//! The quaternion types produced by [`crate::Quaternizer`].
//!
//! Four variants, matching spec.md §3's closed table exactly. Jump
//! variants (`CondJump`, `UncondJump`) carry a `dest` that starts at the
//! sentinel `0` and is mutated in place by [`crate::Quaternizer`]'s
//! backpatch/merge primitives — the only place any quaternion field is
//! ever written after emission.

use std::fmt;

use tpc_par::VariableType;

/// An arithmetic operator appearing in a [`Quaternion::Calc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A relational operator appearing in a [`Quaternion::CondJump`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Ne => "!=",
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A four-field intermediate instruction. Positions within a
/// `Vec<Quaternion>` are addressed 1-based everywhere outside the
/// vector itself (spec.md §3); `0` is reserved as the backpatch
/// sentinel and must never appear as a resolved jump target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Quaternion {
    /// `(:=, source, -, dest)`
    Assign {
        dest: String,
        var_type: VariableType,
        source: String,
    },
    /// `(op, lhs, rhs, dest)` — `dest` names a temporary.
    Calc {
        lhs: String,
        rhs: String,
        op: ArithOp,
        dest: String,
    },
    /// `(jop, lhs, rhs, dest)` — `dest` is a 1-based position, or the
    /// sentinel `0` before backpatching.
    CondJump {
        op: RelOp,
        lhs: String,
        rhs: String,
        dest: usize,
    },
    /// `(j, -, -, dest)` — `dest` is a 1-based position, or `0`.
    UncondJump { dest: usize },
}

impl Quaternion {
    /// The pending/resolved jump target of a jump quaternion, or `None`
    /// for `Assign`/`Calc` (which have no `dest`-as-position field).
    pub fn jump_dest(&self) -> Option<usize> {
        match self {
            Quaternion::CondJump { dest, .. } | Quaternion::UncondJump { dest } => Some(*dest),
            Quaternion::Assign { .. } | Quaternion::Calc { .. } => None,
        }
    }

    /// Overwrites the jump target of a jump quaternion. Panics (a
    /// programmer error, not a user-facing one) if called on
    /// `Assign`/`Calc` — the backpatch/merge primitives only ever walk
    /// chains built from jump quaternions, so this should never happen
    /// in practice.
    pub fn set_jump_dest(&mut self, target: usize) {
        match self {
            Quaternion::CondJump { dest, .. } | Quaternion::UncondJump { dest } => *dest = target,
            Quaternion::Assign { .. } | Quaternion::Calc { .. } => {
                panic!("set_jump_dest called on a non-jump quaternion")
            }
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quaternion::Assign { dest, source, .. } => {
                write!(f, "(:=, {source}, -, {dest})")
            }
            Quaternion::Calc { lhs, rhs, op, dest } => {
                write!(f, "({op}, {lhs}, {rhs}, {dest})")
            }
            Quaternion::CondJump { op, lhs, rhs, dest } => {
                write!(f, "(j{op}, {lhs}, {rhs}, {dest})")
            }
            Quaternion::UncondJump { dest } => write!(f, "(j, -, -, {dest})"),
        }
    }
}
