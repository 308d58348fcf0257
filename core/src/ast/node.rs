use crate::location;

use super::kind::{ExprKind, ItemKind, StmtKind};

/// A top-level node: one direct child of the tree root.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub location: Option<location::Location>,
    pub span: Option<location::Span>,
}

impl Item {
    pub fn new(
        kind: ItemKind,
        location: Option<location::Location>,
        span: Option<location::Span>,
    ) -> Self {
        Item {
            kind,
            location,
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub location: Option<location::Location>,
    pub span: Option<location::Span>,
}

impl Stmt {
    pub fn new(
        kind: StmtKind,
        location: Option<location::Location>,
        span: Option<location::Span>,
    ) -> Self {
        Stmt {
            kind,
            location,
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: Option<location::Location>,
    pub span: Option<location::Span>,
}

impl Expr {
    pub fn new(
        kind: ExprKind,
        location: Option<location::Location>,
        span: Option<location::Span>,
    ) -> Self {
        Expr {
            kind,
            location,
            span,
        }
    }
}

/// The root of one parsed source file. The tree is read-only once the
/// front-end hands it over; translation never mutates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub items: Vec<Item>,
}

impl File {
    pub fn new(items: Vec<Item>) -> Self {
        File { items }
    }
}
