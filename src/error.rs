//! Error types.

use std::fmt;
use std::path::PathBuf;

use cssparser::{BasicParseError, BasicParseErrorKind, ParseErrorKind};

/// A short-lived error.
///
/// The lifetime of the error is the same as the `cssparser::ParserInput` that
/// was used to create a `cssparser::Parser`.  That is, it is the lifetime of
/// the string data that is being parsed.
///
/// Use [`ValueErrorKind::from_parse_error`] to turn it into an owned error.
pub type ParseError<'i> = cssparser::ParseError<'i, ValueErrorKind>;

/// A simple error which refers to a value
#[derive(Debug, Clone, PartialEq)]
pub enum ValueErrorKind {
    /// The value could not be parsed
    Parse(String),

    // The value could be parsed, but is invalid
    Value(String),
}

impl ValueErrorKind {
    pub fn parse_error(s: &str) -> ValueErrorKind {
        ValueErrorKind::Parse(s.to_string())
    }

    pub fn value_error(s: &str) -> ValueErrorKind {
        ValueErrorKind::Value(s.to_string())
    }

    /// Converts a parser error into an owned error kind.
    pub fn from_parse_error(e: ParseError<'_>) -> ValueErrorKind {
        match e.kind {
            ParseErrorKind::Basic(kind) => ValueErrorKind::from(BasicParseError {
                kind,
                location: e.location,
            }),
            ParseErrorKind::Custom(err) => err,
        }
    }
}

impl fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValueErrorKind::Parse(ref s) => write!(f, "parse error: {}", s),

            ValueErrorKind::Value(ref s) => write!(f, "invalid value: {}", s),
        }
    }
}

impl std::error::Error for ValueErrorKind {}

impl<'a> From<BasicParseError<'a>> for ValueErrorKind {
    fn from(e: BasicParseError<'_>) -> ValueErrorKind {
        let BasicParseError { kind, .. } = e;

        let msg = match kind {
            BasicParseErrorKind::UnexpectedToken(_) => "unexpected token",
            BasicParseErrorKind::EndOfInput => "unexpected end of input",
            BasicParseErrorKind::AtRuleInvalid(_) => "invalid @-rule",
            BasicParseErrorKind::AtRuleBodyInvalid => "invalid @-rule body",
            BasicParseErrorKind::QualifiedRuleInvalid => "invalid qualified rule",
        };

        ValueErrorKind::parse_error(msg)
    }
}

/// A configuration field and the reason its value was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {err}")]
pub struct ConfigError {
    pub field: &'static str,
    pub err: ValueErrorKind,
}

impl ConfigError {
    pub fn new(field: &'static str, err: ValueErrorKind) -> ConfigError {
        ConfigError { field, err }
    }

    pub fn value(field: &'static str, msg: &str) -> ConfigError {
        ConfigError::new(field, ValueErrorKind::value_error(msg))
    }
}

/// Errors from querying or resizing a component.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentError {
    /// The component's geometry does not define a central point.
    #[error("cannot determine the central point of {0}")]
    CentralPointUndetermined(&'static str),

    /// The component's rendered size is not known, so it cannot be restricted.
    #[error("cannot determine the size of {0}")]
    SizeUndetermined(&'static str),

    /// An operation would have produced an invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can happen while writing a canvas.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("could not write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// Errors from loading a scene document.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid scene document")]
    Json(#[from] serde_json::Error),

    #[error("scene: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid config for component {index} ({kind})")]
    InvalidConfig {
        index: usize,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("component {index}")]
    Component {
        index: usize,
        #[source]
        source: ComponentError,
    },
}
