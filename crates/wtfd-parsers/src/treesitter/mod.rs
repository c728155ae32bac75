use tree_sitter::{Language, Node, Parser, Tree};

/// Thin wrapper around a tree-sitter parser bound to the Python grammar.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse `source` into a syntax tree.
    ///
    /// tree-sitter recovers from most syntax errors by inserting `ERROR` or
    /// `MISSING` nodes. Such trees are rejected here so callers only ever
    /// see complete, valid modules.
    pub fn parse(&mut self, source: &[u8]) -> Result<Tree, ParseError> {
        let lang: Language = tree_sitter_python::LANGUAGE.into();
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)?;

        if let Some(bad) = first_error_node(tree.root_node()) {
            let pos = bad.start_position();
            return Err(ParseError::Syntax {
                line: pos.row as u32 + 1,
                column: pos.column as u32 + 1,
            });
        }
        Ok(tree)
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("source is not valid UTF-8")]
    Encoding,
    #[error("invalid syntax at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
}

/// First `ERROR`/`MISSING` node in document order, if any.
/// Only subtrees flagged with `has_error` are descended into.
fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut node = root;
    loop {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        let next = node.children(&mut cursor).find(|c| c.has_error());
        match next {
            Some(child) => node = child,
            // has_error() was set but no child carries it: report the node itself.
            None => return Some(node),
        }
    }
}

pub(crate) fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}
