//! Error types.
//!
//! Loading is the only fallible boundary of the control graph. Lookup reports
//! absence with `Option`, layout has no error path of its own.

use std::io;

use thiserror::Error;

/// Failure while loading a screen document.
///
/// A failed load never yields a partially built screen.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[from] DeserializationError),

    #[error("custom control type '{0}' registered more than once")]
    DuplicateCustomType(String),
}

/// The document could not be turned into a control graph.
#[derive(Debug, Error)]
pub enum DeserializationError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown control type '{0}'")]
    UnknownType(String),

    #[error("unknown skin '{0}'")]
    UnknownSkin(String),

    #[error("control type '{0}' cannot contain child controls")]
    ChildrenNotSupported(String),
}

/// Failure of a structural mutation on a single control.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("control type '{0}' cannot contain child controls")]
    ChildrenNotSupported(&'static str),
}

impl From<ControlError> for DeserializationError {
    fn from(err: ControlError) -> Self {
        match err {
            ControlError::ChildrenNotSupported(type_name) => {
                Self::ChildrenNotSupported(type_name.to_string())
            }
        }
    }
}
