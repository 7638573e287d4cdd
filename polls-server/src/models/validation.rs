//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or whitespace only) when it shouldn't be
    Empty { field: String },

    /// Field contains a NUL character, which text columns reject
    NulCharacter { field: String },

    /// Field exceeds maximum length
    TooLong { field: String, max: usize },

    /// Path segment is not a valid integer id
    NotAnInteger { field: String, value: String },

    /// Request body could not be decoded into the expected shape
    Malformed { reason: String },
}

impl ValidationError {
    /// Name of the offending field, when one is known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Empty { field }
            | Self::NulCharacter { field }
            | Self::TooLong { field, .. }
            | Self::NotAnInteger { field, .. } => Some(field.as_str()),
            Self::Malformed { .. } => None,
        }
    }

    /// Re-anchor a field error under `collection[index]`.
    ///
    /// `option_text` becomes `options[2].option_text`.
    pub fn nested(self, collection: &str, index: usize) -> Self {
        let anchor = |field: String| format!("{}[{}].{}", collection, index, field);
        match self {
            Self::Empty { field } => Self::Empty { field: anchor(field) },
            Self::NulCharacter { field } => Self::NulCharacter { field: anchor(field) },
            Self::TooLong { field, max } => Self::TooLong {
                field: anchor(field),
                max,
            },
            Self::NotAnInteger { field, value } => Self::NotAnInteger {
                field: anchor(field),
                value,
            },
            other @ Self::Malformed { .. } => other,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NulCharacter { field } => write!(f, "{} cannot contain NUL characters", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::NotAnInteger { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::Malformed { reason } => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "question_text".into(),
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "question_text exceeds maximum length of 255 characters"
        );
    }

    #[test]
    fn nested_rewrites_field() {
        let err = ValidationError::Empty {
            field: "option_text".into(),
        }
        .nested("options", 2);
        assert_eq!(err.field(), Some("options[2].option_text"));
        assert_eq!(err.to_string(), "options[2].option_text cannot be empty");
    }

    #[test]
    fn malformed_has_no_field() {
        let err = ValidationError::Malformed {
            reason: "expected value at line 1 column 1".into(),
        };
        assert_eq!(err.field(), None);
        assert_eq!(err.clone().nested("options", 0), err);
    }
}
