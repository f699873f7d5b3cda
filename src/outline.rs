//! Outline document model
//!
//! Deserializes the JSON emitted by an outline tool (go-outline and
//! compatible) into a small typed tree. Only the fields this linter cares
//! about are modeled; positions and receiver information are ignored.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while obtaining or validating an outline document.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("failed to run `{tool}` for {file}: {source}")]
    Spawn {
        tool: String,
        file: String,
        source: std::io::Error,
    },

    #[error("{file}: outline output is not valid JSON: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },

    #[error("{file}: unexpected outline shape: {reason}")]
    UnexpectedShape { file: String, reason: String },
}

/// Kind discriminator for an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Package,
    Import,
    Constant,
    Variable,
    Function,
    Type,
    /// Any kind this linter does not recognize. Never reported.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Package => write!(f, "package"),
            Self::Import => write!(f, "import"),
            Self::Constant => write!(f, "constant"),
            Self::Variable => write!(f, "variable"),
            Self::Function => write!(f, "function"),
            Self::Type => write!(f, "type"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One declaration in the outline tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub children: Vec<Entry>,
}

/// A parsed outline document for one source file.
#[derive(Debug, Clone)]
pub struct Outline {
    pub entries: Vec<Entry>,
}

impl Outline {
    /// Parse the raw stdout of the outline tool.
    pub fn parse(file: &str, bytes: &[u8]) -> Result<Self, OutlineError> {
        let entries = serde_json::from_slice(bytes).map_err(|source| OutlineError::Parse {
            file: file.to_string(),
            source,
        })?;
        Ok(Self { entries })
    }

    /// The package-level entry. Every outline is required to start with one;
    /// its children are the file's top-level declarations.
    pub fn package(&self, file: &str) -> Result<&Entry, OutlineError> {
        match self.entries.first() {
            Some(entry) if entry.kind == EntryKind::Package => Ok(entry),
            Some(entry) => Err(OutlineError::UnexpectedShape {
                file: file.to_string(),
                reason: format!("first entry is a {}, expected a package", entry.kind),
            }),
            None => Err(OutlineError::UnexpectedShape {
                file: file.to_string(),
                reason: "document has no entries".to_string(),
            }),
        }
    }
}
