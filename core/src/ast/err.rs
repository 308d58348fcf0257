use crate::error::{Go2cErrorExt, Level};
use crate::location::{Location, Span};

#[derive(Debug, Clone)]
pub struct EmptySourceError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl EmptySourceError {
    /// Default constructor for an empty-source error.
    pub fn new(issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        EmptySourceError {
            level: Level::Error,
            message: "The provided source file is empty.".to_string(),
            issuer,
            location,
            span,
        }
    }
}

impl std::fmt::Display for EmptySourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EmptySourceError {}

impl Go2cErrorExt for EmptySourceError {
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

#[derive(Debug, Clone)]
pub struct SyntaxError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl SyntaxError {
    pub fn new(issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        SyntaxError {
            level: Level::Error,
            message: "There was a syntax error in the source file.".to_string(),
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
        SyntaxError {
            level,
            message,
            issuer,
            location,
            span,
        }
    }
}

impl std::fmt::Display for SyntaxError {
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

impl std::error::Error for SyntaxError {}

impl Go2cErrorExt for SyntaxError {
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
