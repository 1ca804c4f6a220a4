//! Abstract syntax produced by [`crate::parse`].

/// The single supported variable type. The grammar has no syntax for any
/// other type, so this is an enum of one variant rather than a type-check
/// result — matching the "integer only" scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableType {
    Integer,
}

/// An arithmetic, relational, or boolean operator appearing in a
/// [`Expr::BinaryExpression`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Plus,
    Minus,
    Mult,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    NumberLiteral {
        value: i32,
    },
    Identifier {
        name: String,
    },
    BinaryExpression {
        left: Box<Expr>,
        right: Box<Expr>,
        operator: BinOp,
    },
}

/// Statement nodes, including the two header pseudo-statements
/// (`Program`, `VariableDeclaration`) that the quaternizer does not lower.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Program {
        name: String,
    },
    VariableDeclaration {
        names: Vec<String>,
        var_type: VariableType,
    },
    VariableAssignment {
        target: String,
        value: Expr,
    },
    PrintStatement {
        expression: Expr,
    },
    ReadStatement {
        target: String,
    },
    IfStatement {
        condition: Expr,
        true_body: Vec<Stmt>,
        false_body: Vec<Stmt>,
    },
    WhileStatement {
        condition: Expr,
        body: Vec<Stmt>,
    },
    RepeatStatement {
        condition: Expr,
        body: Vec<Stmt>,
    },
}
