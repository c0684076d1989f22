use std::fmt;
use thiserror::Error;

/// The JSON type a schema field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Number,
    Integer,
    String,
    Object,
    Array,
    NumberOrNull,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Number => "number",
            JsonKind::Integer => "integer",
            JsonKind::String => "string",
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::NumberOrNull => "number or null",
        };
        f.write_str(name)
    }
}

/// The first constraint a response broke. `path` is a dotted JSON path,
/// `$` for the document root.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaViolation {
    #[error("Missing required field '{path}'")]
    MissingField { path: String },

    #[error("Field '{path}' should be {expected}, found {found}")]
    WrongType {
        path: String,
        expected: JsonKind,
        found: &'static str,
    },
}
