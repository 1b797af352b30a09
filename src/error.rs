//! Error taxonomy for the catalogue core.
//!
//! Fetching, decoding and lookups each have their own error type so callers
//! can tell a slow provider from a broken payload from a missing id. The
//! [`CatalogError`] umbrella wraps them without losing the original kind.

use std::fmt;

use thiserror::Error;

use crate::provider::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The request did not complete before its deadline.
    Timeout,
    /// The provider answered with a non-2xx status or could not be reached.
    RemoteFailure,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::RemoteFailure => write!(f, "remote failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} while fetching {locator}: {message}")]
pub struct TransportError {
    pub kind: TransportKind,
    pub locator: String,
    pub message: String,
}

impl TransportError {
    pub fn timeout(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: TransportKind::Timeout,
            locator: locator.into(),
            message: message.into(),
        }
    }

    pub fn remote(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: TransportKind::RemoteFailure,
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Classifies a reqwest failure. Connection problems count as remote failures.
    pub fn from_reqwest(locator: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(locator, err.to_string())
        } else {
            Self::remote(locator, err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {resource} payload: {message}")]
pub struct DecodeError {
    pub resource: Resource,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {resource} record with id {id}")]
pub struct NotFoundError {
    pub resource: Resource,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("worker task failed: {0}")]
    Task(String),
}

impl CatalogError {
    pub fn transport_kind(&self) -> Option<TransportKind> {
        match self {
            CatalogError::Transport(e) => Some(e.kind),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

impl From<tokio::task::JoinError> for CatalogError {
    fn from(err: tokio::task::JoinError) -> Self {
        CatalogError::Task(err.to_string())
    }
}
