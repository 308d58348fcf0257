use std::path::PathBuf;

use crate::Go2cErrorExt;

#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl Source {
    pub fn new(path: PathBuf) -> Result<Self, Box<dyn Go2cErrorExt>> {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::<dyn Go2cErrorExt>::from(Box::new(MissingSourceError {
                path: path.clone(),
                reason: e.to_string(),
            }))
        })?;
        Ok(Source {
            name,
            path,
            content,
        })
    }

    /// Wrap in-memory text, labelled with `name` for diagnostics.
    pub fn inline(name: &str, content: &str) -> Self {
        Source {
            name: name.to_string(),
            path: PathBuf::from(name),
            content: content.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Source: {} at {:?}", self.name, self.path)
    }
}

#[derive(Debug, Clone)]
pub struct MissingSourceError {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for MissingSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing source file at {:?}: {}", self.path, self.reason)
    }
}

impl std::error::Error for MissingSourceError {}

impl Go2cErrorExt for MissingSourceError {
    fn level(&self) -> crate::Level {
        crate::Level::Error
    }

    fn message(&self) -> String {
        format!("Missing source file at {:?}: {}", self.path, self.reason)
    }

    fn issuer(&self) -> String {
        "go2c.source".to_string()
    }

    fn span(&self) -> Option<crate::location::Span> {
        None
    }

    fn location(&self) -> Option<crate::location::Location> {
        None
    }
}
