use std::fmt;

use crate::rules::row_model::RowId;

#[derive(Debug)]
pub enum UiError {
    /// A trigger or menu id from a binding does not exist on the page
    MissingElement { id: String, binding: String },

    /// No menu binding is registered under this trigger or menu id
    UnknownBinding(String),

    /// Row id is not (or no longer) part of the collection
    RowNotFound { collection: String, id: RowId },

    /// Row position is outside the live collection
    PositionOutOfRange { collection: String, position: usize, len: usize },

    /// Value is not one of the row's current value choices
    InvalidChoice { value: String, option: String },

    /// Opening or reading a snapshot, scenario, config or trace file failed
    Io { path: String, source: std::io::Error },

    /// YAML parsing failed
    YamlParse { context: String, source: serde_yaml::Error },

    /// JSON serialization failed
    JsonSerialize { context: String, source: serde_json::Error },
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::MissingElement { id, binding } => {
                write!(f, "Element '{}' not found on page (binding {})", id, binding)
            }
            UiError::UnknownBinding(id) => {
                write!(f, "No menu binding for '{}'", id)
            }
            UiError::RowNotFound { collection, id } => {
                write!(f, "Row {} not found in {}", id, collection)
            }
            UiError::PositionOutOfRange { collection, position, len } => {
                write!(f, "Row position {} out of range for {} ({} rows)", position, collection, len)
            }
            UiError::InvalidChoice { value, option } => {
                write!(f, "'{}' is not a value of option '{}'", value, option)
            }
            UiError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path, source)
            }
            UiError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            UiError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Io { source, .. } => Some(source),
            UiError::YamlParse { source, .. } => Some(source),
            UiError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
