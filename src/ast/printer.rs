//! Canonical source printer.
//!
//! Printing emits the tokens a node was parsed from, in order, with
//! normalized spacing. No parentheses are invented: explicit grouping is
//! already recorded as `UnaryOp::Group`, so re-parsing the printed text
//! with the same parser configuration yields an equal tree.

use std::fmt::{self, Display, Formatter};

use super::{
    ast::Program,
    expressions::{BinaryOp, Expr, Literal, Param, UnaryOp},
    statements::{Block, Stmt},
};

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{};", stmt)?;
        }
        Ok(())
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.statements {
            write!(f, " {};", stmt)?;
        }
        write!(f, " }}")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expr(expr) => write!(f, "{}", expr),
            Stmt::Block(block) => write!(f, "{}", block),
            Stmt::IfElse {
                condition,
                then_block,
                else_block,
            } => {
                write!(f, "if ({}) {}", condition, then_block)?;
                if let Some(else_block) = else_block {
                    write!(f, " else {}", else_block)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => write!(f, "while ({}) {}", condition, body),
            Stmt::VarDecl { name, ty, init } => {
                write!(f, "let {}: {}", name, ty)?;
                if let Some(init) = init {
                    write!(f, " = {}", init)?;
                }
                Ok(())
            }
            Stmt::FunctionDecl {
                return_type,
                name,
                params,
                body,
            } => write!(
                f,
                "fun {} {}({}) {}",
                return_type,
                name,
                ParamList(params),
                body
            ),
            Stmt::ClassDecl { name, parent, body } => {
                write!(f, "class {}", name)?;
                if let Some(parent) = parent {
                    write!(f, ": {}", parent)?;
                }
                write!(f, " {}", body)
            }
            Stmt::Return(None) => write!(f, "return"),
            Stmt::Return(Some(value)) => write!(f, "return {}", value),
        }
    }
}

/// Every parameter is followed by a comma, the last one included.
struct ParamList<'a>(&'a [Param]);

impl Display for ParamList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (name, ty)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}: {},", name, ty)?;
        }
        Ok(())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Double(value) => {
                // Keep a decimal point so the literal lexes as a double again.
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
            Literal::Str(value) => write!(f, "\"{}\"", value),
            Literal::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::Assign { name, value } => write!(f, "{} = {}", name, value),
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Expr::Unary { op, operand } => match op {
                UnaryOp::Negate => write!(f, "-{}", operand),
                UnaryOp::Not => write!(f, "!{}", operand),
                UnaryOp::Group => write!(f, "({})", operand),
            },
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Function {
                return_type,
                params,
                body,
            } => write!(f, "lambda {} ({}) {}", return_type, ParamList(params), body),
        }
    }
}
