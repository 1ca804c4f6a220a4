//! The quaternizer: lowers an AST into a position-addressed quaternion
//! vector via the classic truelist/falselist backpatching scheme
//! (spec.md §4.3).
//!
//! State is scoped to one `Quaternizer` instance per compilation — no
//! class-level/global mutable defaults (spec.md §9's "Global/class-level
//! state" note) — so compiling several files in the same process never
//! cross-contaminates temp counters or the instruction vector.

use tpc_par::{BinOp, Expr, Stmt, VariableType};

use crate::error::QuaternizerError;
use crate::quad::{ArithOp, Quaternion, RelOp};

impl TryFrom<BinOp> for ArithOp {
    type Error = QuaternizerError;

    fn try_from(op: BinOp) -> Result<Self, Self::Error> {
        match op {
            BinOp::Plus => Ok(ArithOp::Add),
            BinOp::Minus => Ok(ArithOp::Sub),
            BinOp::Mult => Ok(ArithOp::Mul),
            BinOp::Div => Ok(ArithOp::Div),
            other => Err(QuaternizerError::NonArithmeticOperator { operator: other }),
        }
    }
}

impl TryFrom<BinOp> for RelOp {
    type Error = QuaternizerError;

    fn try_from(op: BinOp) -> Result<Self, Self::Error> {
        match op {
            BinOp::Eq => Ok(RelOp::Eq),
            BinOp::Ne => Ok(RelOp::Ne),
            BinOp::Lt => Ok(RelOp::Lt),
            BinOp::Gt => Ok(RelOp::Gt),
            BinOp::Le => Ok(RelOp::Le),
            BinOp::Ge => Ok(RelOp::Ge),
            other => Err(QuaternizerError::NonRelationalOperator { operator: other }),
        }
    }
}

/// The sentinel marking the end of a backpatch chain / an unresolved
/// jump target. Never a valid 1-based position.
const NIL: usize = 0;

/// Lowers a top-level statement list — `Program` followed by the
/// procedure body, as `tpc-par::parse` returns it — into the quaternion
/// vector described by spec.md §3/§4.3.
pub fn generate(stmts: &[Stmt]) -> Result<Vec<Quaternion>, QuaternizerError> {
    let mut q = Quaternizer::new();
    q.generate_top_level(stmts)?;
    Ok(q.quaternions)
}

pub struct Quaternizer {
    quaternions: Vec<Quaternion>,
    temp_counter: u32,
}

impl Quaternizer {
    pub fn new() -> Self {
        Self {
            quaternions: Vec::new(),
            temp_counter: 0,
        }
    }

    /// 1-based position of the most recently emitted instruction; `0`
    /// before anything has been emitted.
    fn current_pos(&self) -> usize {
        self.quaternions.len()
    }

    fn emit(&mut self, q: Quaternion) -> usize {
        self.quaternions.push(q);
        self.current_pos()
    }

    fn get_temporary_variable(&mut self) -> String {
        self.temp_counter += 1;
        format!("t{}", self.temp_counter)
    }

    /// Walks the chain starting at `head`, setting every `dest` along it
    /// to `target`. Matches spec.md §4.3's `backpatch` exactly: `head`
    /// advances by reading the *old* `dest` before overwriting it.
    fn backpatch(&mut self, mut head: usize, target: usize) {
        while head != NIL && head <= self.quaternions.len() {
            let slot = &mut self.quaternions[head - 1];
            let old = slot
                .jump_dest()
                .expect("backpatch chains only ever point at jump quaternions");
            slot.set_jump_dest(target);
            head = old;
        }
    }

    /// Concatenates two pending-jump lists without resolving either.
    /// `merge(lhs, 0) == lhs`; otherwise walks `rhs` to its terminator
    /// and grafts `lhs` there, returning `rhs`'s head — so a later
    /// `backpatch` visits `rhs`'s chain first, then `lhs`'s (spec.md
    /// §9's "subtle asymmetry" note).
    fn merge(&mut self, lhs: usize, rhs: usize) -> usize {
        if rhs == NIL {
            return lhs;
        }
        let mut cur = rhs;
        loop {
            let next = self.quaternions[cur - 1]
                .jump_dest()
                .expect("merge chains only ever point at jump quaternions");
            if next == NIL {
                self.quaternions[cur - 1].set_jump_dest(lhs);
                return rhs;
            }
            cur = next;
        }
    }

    /// A literal or identifier materializes directly to its string
    /// form; a binary expression must have an arithmetic operator root
    /// and is lowered recursively, one `Calc` per interior node, in
    /// postorder (so temp names are allocated in first-use order).
    fn calculate_expression(&mut self, expr: &Expr) -> Result<String, QuaternizerError> {
        match expr {
            Expr::NumberLiteral { value } => Ok(value.to_string()),
            Expr::Identifier { name } => Ok(name.clone()),
            Expr::BinaryExpression {
                left,
                right,
                operator,
            } => {
                let op = ArithOp::try_from(*operator)?;
                let lhs = self.calculate_expression(left)?;
                let rhs = self.calculate_expression(right)?;
                let dest = self.get_temporary_variable();
                self.emit(Quaternion::Calc {
                    lhs,
                    rhs,
                    op,
                    dest: dest.clone(),
                });
                Ok(dest)
            }
        }
    }

    /// Lowers a boolean/relational condition using the truelist/falselist
    /// scheme (spec.md §4.3). Returns `(code_begin, true_list, false_list)`.
    fn trans_condition(
        &mut self,
        expr: &Expr,
    ) -> Result<(usize, usize, usize), QuaternizerError> {
        let Expr::BinaryExpression {
            left,
            right,
            operator,
        } = expr
        else {
            return Err(QuaternizerError::UnsupportedCondition {
                description: format!("{expr:?}"),
            });
        };

        match operator {
            BinOp::Or => {
                let (l_begin, l_true, l_false) = self.trans_condition(left)?;
                let (r_begin, r_true, r_false) = self.trans_condition(right)?;
                self.backpatch(l_false, r_begin);
                let true_list = self.merge(l_true, r_true);
                Ok((l_begin, true_list, r_false))
            }
            BinOp::And => {
                let (l_begin, l_true, l_false) = self.trans_condition(left)?;
                let (r_begin, r_true, r_false) = self.trans_condition(right)?;
                self.backpatch(l_true, r_begin);
                let false_list = self.merge(l_false, r_false);
                Ok((l_begin, r_true, false_list))
            }
            _ => {
                let rel = RelOp::try_from(*operator)?;
                let lhs = self.calculate_expression(left)?;
                let rhs = self.calculate_expression(right)?;
                let pos = self.emit(Quaternion::CondJump {
                    op: rel,
                    lhs,
                    rhs,
                    dest: NIL,
                });
                self.emit(Quaternion::UncondJump { dest: NIL });
                Ok((pos, pos, pos + 1))
            }
        }
    }

    fn lower_assignment(&mut self, target: &str, value: &Expr) -> Result<(), QuaternizerError> {
        let source = self.calculate_expression(value)?;
        self.emit(Quaternion::Assign {
            dest: target.to_string(),
            var_type: VariableType::Integer,
            source,
        });
        Ok(())
    }

    /// `PrintStatement` has no quaternion variant of its own
    /// (SPEC_FULL.md §4): it reuses `Assign` with the reserved `write`
    /// pseudo-destination a later code generator recognizes by name.
    fn lower_print(&mut self, expression: &Expr) -> Result<(), QuaternizerError> {
        let source = self.calculate_expression(expression)?;
        self.emit(Quaternion::Assign {
            dest: "write".to_string(),
            var_type: VariableType::Integer,
            source,
        });
        Ok(())
    }

    /// `ReadStatement` likewise reuses `Assign`, with the reserved
    /// `read` pseudo-source.
    fn lower_read(&mut self, target: &str) {
        self.emit(Quaternion::Assign {
            dest: target.to_string(),
            var_type: VariableType::Integer,
            source: "read".to_string(),
        });
    }

    /// Lowers `IF`. The bypass jump over the false branch (`out`) is
    /// returned as a pending list for the caller to resolve to "after
    /// the whole `if`" — spec.md §9's bug-fix #1, instead of the
    /// reference's silent drop of this jump.
    fn lower_if(
        &mut self,
        condition: &Expr,
        true_body: &[Stmt],
        false_body: &[Stmt],
    ) -> Result<usize, QuaternizerError> {
        let (_, true_list, false_list) = self.trans_condition(condition)?;

        let true_begin = self.current_pos() + 1;
        self.backpatch(true_list, true_begin);
        let true_pending = self.lower_stmt_list(true_body)?;
        if true_pending != NIL {
            let target = self.current_pos() + 1;
            self.backpatch(true_pending, target);
        }

        let out = self.emit(Quaternion::UncondJump { dest: NIL });

        let false_begin = self.current_pos() + 1;
        self.backpatch(false_list, false_begin);
        let false_pending = self.lower_stmt_list(false_body)?;
        if false_pending != NIL {
            let target = self.current_pos() + 1;
            self.backpatch(false_pending, target);
        }

        Ok(out)
    }

    /// Lowers `WHILE`. Returns the condition's false-list as the
    /// pending "exit" jump for the enclosing context to resolve.
    fn lower_while(&mut self, condition: &Expr, body: &[Stmt]) -> Result<usize, QuaternizerError> {
        let cond_begin = self.current_pos() + 1;
        let (_, true_list, false_list) = self.trans_condition(condition)?;

        let body_begin = self.current_pos() + 1;
        self.backpatch(true_list, body_begin);
        let body_pending = self.lower_stmt_list(body)?;
        if body_pending != NIL {
            let target = self.current_pos() + 1;
            self.backpatch(body_pending, target);
        }

        self.emit(Quaternion::UncondJump { dest: cond_begin });
        Ok(false_list)
    }

    /// Lowers `REPEAT..UNTIL`. Both the true-exit (leave the loop) and
    /// false-exit (loop back) are resolved here, so nothing is left
    /// pending for the caller.
    fn lower_repeat(&mut self, condition: &Expr, body: &[Stmt]) -> Result<usize, QuaternizerError> {
        let repeat_begin = self.current_pos() + 1;
        let body_pending = self.lower_stmt_list(body)?;
        if body_pending != NIL {
            let target = self.current_pos() + 1;
            self.backpatch(body_pending, target);
        }

        let (_, true_list, false_list) = self.trans_condition(condition)?;
        let repeat_end = self.current_pos() + 1;
        self.backpatch(true_list, repeat_end);
        self.backpatch(false_list, repeat_begin);

        Ok(NIL)
    }

    fn lower_stmt(&mut self, stmt: &Stmt) -> Result<usize, QuaternizerError> {
        match stmt {
            // Header pseudo-statements: consumed by the parser for
            // validation only, never lowered (spec.md §3).
            Stmt::Program { .. } | Stmt::VariableDeclaration { .. } => Ok(NIL),
            Stmt::VariableAssignment { target, value } => {
                self.lower_assignment(target, value)?;
                Ok(NIL)
            }
            Stmt::PrintStatement { expression } => {
                self.lower_print(expression)?;
                Ok(NIL)
            }
            Stmt::ReadStatement { target } => {
                self.lower_read(target);
                Ok(NIL)
            }
            Stmt::IfStatement {
                condition,
                true_body,
                false_body,
            } => self.lower_if(condition, true_body, false_body),
            Stmt::WhileStatement { condition, body } => self.lower_while(condition, body),
            Stmt::RepeatStatement { condition, body } => self.lower_repeat(condition, body),
        }
    }

    /// Lowers a statement list, backpatching each statement's trailing
    /// pending list to the position where the next one starts emitting.
    /// The final statement's pending list (if any) is returned instead
    /// of being resolved — the caller decides what comes "after".
    fn lower_stmt_list(&mut self, stmts: &[Stmt]) -> Result<usize, QuaternizerError> {
        let mut pending = NIL;
        for stmt in stmts {
            if pending != NIL {
                let target = self.current_pos() + 1;
                self.backpatch(pending, target);
            }
            pending = self.lower_stmt(stmt)?;
        }
        Ok(pending)
    }

    /// Entry point: lowers the whole top-level statement list, resolving
    /// any statement's trailing pending list left dangling at the very
    /// end to `current_pos() + 1` — one past the end of the program
    /// (spec.md §3's "fall through past end of program").
    fn generate_top_level(&mut self, stmts: &[Stmt]) -> Result<(), QuaternizerError> {
        let pending = self.lower_stmt_list(stmts)?;
        if pending != NIL {
            let target = self.current_pos() + 1;
            self.backpatch(pending, target);
        }
        Ok(())
    }
}

impl Default for Quaternizer {
    fn default() -> Self {
        Self::new()
    }
}
