use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("command {kind} is missing its {field}")]
    MissingField { kind: char, field: &'static str },

    #[error("command {kind} {field} '{value}' must not contain whitespace")]
    InvalidField {
        kind: char,
        field: &'static str,
        value: String,
    },

    #[error("unexpected trailing field '{value}' in command {kind}")]
    UnexpectedField { kind: char, value: String },

    #[error("invalid severity '{value}': {source}")]
    InvalidSeverity {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("severity '{value}' is not a finite number")]
    NonFiniteSeverity { value: String },

    #[error("invalid direction '{value}', expected BEFORE or AFTER")]
    InvalidDirection { value: String },
}
