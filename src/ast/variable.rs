use super::Line;

/// Reference to a variable by name; resolved against the local then global scope at evaluation
/// time (§4.3). Also the only addressable expression form (`&IDENT`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub line: Line,
}
