use tree_sitter::Node;

use crate::treesitter::node_text;

/// Trimmed docstring of a `class_definition` or `function_definition` node.
///
/// The docstring is the first statement of the body when that statement is a
/// bare string literal (implicit concatenation allowed). Comments do not count
/// as statements. f-strings and bytes literals are not docstrings, and neither
/// is a one-element tuple such as `'a',`. Escape sequences are decoded before
/// trimming, so blank docstrings (including `'\n'`) are reported as `None`.
pub fn docstring_of(definition: Node<'_>, source: &[u8]) -> Option<String> {
    let body = definition.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")?;
    if first.kind() != "expression_statement" || first.child_count() != 1 {
        return None;
    }

    let text = literal_text(first.child(0)?, source)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn literal_text(expr: Node<'_>, source: &[u8]) -> Option<String> {
    match expr.kind() {
        "string" => string_value(expr, source),
        "concatenated_string" => {
            let mut out = String::new();
            let mut cursor = expr.walk();
            for part in expr.named_children(&mut cursor) {
                if part.kind() == "comment" {
                    continue;
                }
                if part.kind() != "string" {
                    return None;
                }
                out.push_str(&string_value(part, source)?);
            }
            Some(out)
        }
        "parenthesized_expression" if expr.named_child_count() == 1 => {
            literal_text(expr.named_child(0)?, source)
        }
        _ => None,
    }
}

/// Value of a non-formatted, non-bytes string literal.
fn string_value(string: Node<'_>, source: &[u8]) -> Option<String> {
    let count = string.child_count();
    if count < 2 {
        return None;
    }
    let start = string.child(0)?;
    let end = string.child(count - 1)?;
    if start.kind() != "string_start" || end.kind() != "string_end" {
        return None;
    }

    let prefix = node_text(start, source).trim_end_matches(['"', '\'']);
    if prefix.contains(['f', 'F', 'b', 'B']) {
        return None;
    }

    let content = std::str::from_utf8(source.get(start.end_byte()..end.start_byte())?).ok()?;
    if prefix.contains(['r', 'R']) {
        Some(content.to_string())
    } else {
        Some(unescape(content))
    }
}

/// Decode backslash escapes of a non-raw literal. Unknown escapes are kept
/// verbatim, as Python does.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '\\' | '\'' | '"' => out.push(next),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.extend(char::from_u32(value));
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.by_ref().take(width).collect();
                match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if digits.len() == width => out.push(decoded),
                    _ => {
                        out.push('\\');
                        out.push(next);
                        out.push_str(&digits);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}
