//! Declaration extraction for Python modules.

mod docstring;

pub use docstring::docstring_of;

use tree_sitter::{Node, Tree};
use wtfd_core::types::{Declaration, DeclarationKind};

use crate::treesitter::{node_text, ParseError, PythonParser};

/// File extension of analyzable Python sources.
pub const SOURCE_EXTENSION: &str = ".py";

/// Parses Python source and enumerates its class and function definitions.
pub struct DeclarationExtractor {
    parser: PythonParser,
}

impl DeclarationExtractor {
    pub fn new() -> Self {
        Self {
            parser: PythonParser::new(),
        }
    }

    /// Every class and function in `source`, nested ones included, in
    /// document order.
    pub fn extract(&mut self, source: &str) -> Result<Vec<Declaration>, ParseError> {
        let bytes = source.as_bytes();
        let tree = self.parser.parse(bytes)?;
        Ok(collect_declarations(&tree, bytes))
    }

    /// Like [`extract`](Self::extract) for raw file contents.
    pub fn extract_bytes(&mut self, contents: &[u8]) -> Result<Vec<Declaration>, ParseError> {
        let source = std::str::from_utf8(contents).map_err(|_| ParseError::Encoding)?;
        self.extract(source)
    }
}

impl Default for DeclarationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order walk over the whole tree. Each node is visited exactly once.
fn collect_declarations(tree: &Tree, source: &[u8]) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    let mut cursor = tree.walk();

    loop {
        if let Some(decl) = declaration_for(cursor.node(), source) {
            declarations.push(decl);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return declarations;
            }
        }
    }
}

fn declaration_for(node: Node<'_>, source: &[u8]) -> Option<Declaration> {
    let kind = match node.kind() {
        "class_definition" => DeclarationKind::Class,
        "function_definition" => DeclarationKind::Function,
        _ => return None,
    };
    let name = node.child_by_field_name("name")?;
    Some(Declaration {
        name: node_text(name, source).to_string(),
        kind,
        line: node.start_position().row as u32 + 1,
        docstring: docstring_of(node, source),
    })
}
