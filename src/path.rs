//! Path expressions addressing a single value inside a descriptor tree.
//!
//! Grammar: dot-separated element names, an optional `[index]` suffix for
//! list access, and an optional trailing `(key)` for map lookup where the
//! key itself contains dots (e.g. `properties(source.code.level)`).

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Descend into the named child of a map node.
    Name(String),
    /// Descend into the named list child, then into its i-th element.
    Indexed(String, usize),
    /// Map lookup using the whole parenthesized string as a literal key.
    Key(String),
}

/// Splits a path expression into ordered segments.
///
/// A trailing `(key)` is kept atomic: `properties(a.b)` becomes
/// `[Name("properties"), Key("a.b")]`, while `properties.a.b` splits into
/// three name segments. Expressions that cannot be parsed yield segments
/// that will simply fail to resolve; path parsing itself never errors.
pub fn parse(expression: &str) -> Vec<Segment> {
    let expression = expression.trim();

    let (head, key) = match split_trailing_key(expression) {
        Some((head, key)) => (head, Some(key)),
        None => (expression, None),
    };

    let mut segments = Vec::new();
    for part in head.split('.') {
        if part.is_empty() {
            continue;
        }
        segments.push(parse_part(part));
    }
    if let Some(key) = key {
        segments.push(Segment::Key(key.to_string()));
    }
    segments
}

fn split_trailing_key(expression: &str) -> Option<(&str, &str)> {
    let stripped = expression.strip_suffix(')')?;
    let open = stripped.find('(')?;
    Some((&stripped[..open], &stripped[open + 1..]))
}

fn parse_part(part: &str) -> Segment {
    if let Some(stripped) = part.strip_suffix(']') {
        if let Some(open) = stripped.find('[') {
            let name = &stripped[..open];
            if let Ok(index) = stripped[open + 1..].parse::<usize>() {
                return Segment::Indexed(name.to_string(), index);
            }
        }
    }
    Segment::Name(part.to_string())
}
