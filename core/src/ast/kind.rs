//! file: core/src/ast/kind.rs
//! description: AST kind definitions and operator enums.
//!
//! Defines the closed per-category sum types (`ItemKind`, `StmtKind`,
//! `ExprKind`, `TypeRef`) along with `BinaryOperator` and
//! `UnaryOperator`. Keeping one enum per syntax category makes every
//! lowering dispatch exhaustive: a new construct is a compile error in
//! each consumer until it is handled.
//!
use super::node::{Expr, Stmt};

/// Represents binary operators in the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,  // ==
    Ne,  // !=
    Lt,  // <
    Le,  // <=
    Gt,  // >
    Ge,  // >=
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
}

impl BinaryOperator {
    /// The operator's canonical textual form, shared by both languages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents unary operators in the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,  // +
    Minus, // -
    Not,   // !
}

/// What sort of literal a `Literal` expression carries. The raw source
/// text is kept either way; the kind only records how it scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Bool,
}

/// A reference to a type as spelled in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Named { name: String },
    Pointer { inner: Box<TypeRef> },
}

impl TypeRef {
    /// The source spelling of this type reference (`int`, `*int`, ...).
    pub fn spelling(&self) -> String {
        match self {
            TypeRef::Named { name } => name.clone(),
            TypeRef::Pointer { inner } => format!("*{}", inner.spelling()),
        }
    }

    /// The plain identifier name, if this is a named type.
    pub fn named(&self) -> Option<&str> {
        match self {
            TypeRef::Named { name } => Some(name),
            TypeRef::Pointer { .. } => None,
        }
    }
}

/// One function parameter: a name with an explicit type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

/// A top-level function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub results: Vec<TypeRef>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// The package clause. Parsed so the tree is complete; contributes
    /// no output.
    Package { name: String },
    /// An import declaration. `path` keeps its surrounding quotes
    /// exactly as written in the source.
    Import { path: String },
    Func(FuncDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Var {
        names: Vec<String>,
        ty: Option<TypeRef>,
        values: Vec<Expr>,
    },
    Return {
        results: Vec<Expr>,
    },
    Expr {
        expr: Expr,
    },
    /// An empty `else_body` is the explicit "no else" marker; a
    /// present-but-empty else clause in the source parses to the same
    /// thing and is equally fine.
    If {
        cond: Expr,
        body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
    Assign {
        target: Expr,
        value: Expr,
    },
    For {
        cond: Option<Expr>,
        body: Vec<Stmt>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Ident {
        name: String,
    },
    /// `value` is the literal's raw source text, quotes and all. The
    /// lowering stage re-emits it without re-encoding.
    Literal {
        kind: LiteralKind,
        value: String,
    },
    Unary {
        op: UnaryOperator,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Selector {
        object: Box<Expr>,
        field: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Package { .. } => "Package",
            ItemKind::Import { .. } => "Import",
            ItemKind::Func(_) => "Func",
        }
    }
}

impl StmtKind {
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Var { .. } => "Var",
            StmtKind::Return { .. } => "Return",
            StmtKind::Expr { .. } => "Expr",
            StmtKind::If { .. } => "If",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::For { .. } => "For",
        }
    }
}

impl ExprKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Ident { .. } => "Ident",
            ExprKind::Literal { .. } => "Literal",
            ExprKind::Unary { .. } => "Unary",
            ExprKind::Binary { .. } => "Binary",
            ExprKind::Call { .. } => "Call",
            ExprKind::Selector { .. } => "Selector",
            ExprKind::Index { .. } => "Index",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for StmtKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
