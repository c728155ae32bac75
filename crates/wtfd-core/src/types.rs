use serde::{Deserialize, Serialize};

/// The kinds of declaration that can carry a docstring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Function,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Function => "function",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class or function definition extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Simple name of the symbol (e.g. "get_queryset").
    pub name: String,
    pub kind: DeclarationKind,
    /// Line of the `class`/`def` keyword (1-based).
    pub line: u32,
    /// Trimmed docstring text. `None` when missing or blank.
    pub docstring: Option<String>,
}

impl Declaration {
    pub fn has_docstring(&self) -> bool {
        self.docstring.is_some()
    }
}

/// A checkable declaration that lacks a docstring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub name: String,
    pub kind: DeclarationKind,
    pub file: String,
    pub line: u32,
}

impl Violation {
    pub fn new(declaration: &Declaration, file: &str) -> Self {
        Self {
            name: declaration.name.clone(),
            kind: declaration.kind,
            file: file.to_string(),
            line: declaration.line,
        }
    }
}

/// A candidate file that was left out of the audit because it failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}
