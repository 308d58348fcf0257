use crate::error::{Go2cErrorExt, Level};
use crate::location::{Location, Span};

/// A lowering precondition was violated: the input tree has a shape
/// the mapping rules were never designed to cover (as opposed to a
/// merely unmapped leaf, which falls back non-fatally). Raising one of
/// these aborts the whole translation.
#[derive(Debug, Clone)]
pub struct LoweringError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl LoweringError {
    pub fn new(
        message: String,
        issuer: String,
        location: Option<Location>,
        span: Option<Span>,
    ) -> Self {
        LoweringError {
            level: Level::Error,
            message,
            issuer,
            location,
            span,
        }
    }

    pub fn with(
        level: Level,
        message: String,
        issuer: String,
        location: Option<Location>,
        span: Option<Span>,
    ) -> Self {
        LoweringError {
            level,
            message,
            issuer,
            location,
            span,
        }
    }
}

impl std::fmt::Display for LoweringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(loc) = &self.location {
            write!(
                f,
                "{} (at {}:{}:{})",
                self.message, loc.file, loc.line, loc.column
            )
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for LoweringError {}

impl Go2cErrorExt for LoweringError {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }

    fn span(&self) -> Option<Span> {
        self.span.clone()
    }

    fn location(&self) -> Option<Location> {
        self.location.clone()
    }
}
