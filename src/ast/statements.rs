use std::slice::Iter;

use super::{
    expressions::{Expr, Param},
    types::Type,
};

/// `{ ... }`: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    Block(Block),
    IfElse {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    While {
        condition: Expr,
        body: Block,
    },
    VarDecl {
        name: String,
        ty: Type,
        init: Option<Expr>,
    },
    FunctionDecl {
        return_type: Type,
        name: String,
        params: Vec<Param>,
        body: Block,
    },
    ClassDecl {
        name: String,
        parent: Option<Type>,
        body: Block,
    },
    Return(Option<Expr>),
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }
}
