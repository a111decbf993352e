use serde::{Deserialize, Serialize};

/// One column of the catalog table, as reported by schema introspection.
///
/// `position` is the 0-based ordinal from the table definition and is the
/// order every heuristic over the schema walks in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub position: usize,
    /// Declared SQL type. Informational only; SQLite does not enforce it.
    pub declared_type: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, position: usize, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position,
            declared_type: declared_type.into(),
        }
    }
}
