//! Structured error types shared across circular society crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CsError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (arc names, iteration counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the circular society engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CsError {
    /// An arc with the requested name already exists.
    #[error("duplicate name: {0}")]
    DuplicateName(ErrorInfo),
    /// No arc carries the requested name.
    #[error("name not found: {0}")]
    NameNotFound(ErrorInfo),
    /// A bounded fixed-point iteration ran out of iterations.
    #[error("non-convergence: {0}")]
    NonConvergence(ErrorInfo),
    /// The integer program engine reported that no feasible point exists.
    #[error("solver infeasible: {0}")]
    SolverInfeasible(ErrorInfo),
    /// The integer program engine failed or returned an unusable solution.
    #[error("solver error: {0}")]
    SolverError(ErrorInfo),
    /// Geometric input rejected at construction time.
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CsError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CsError::DuplicateName(info)
            | CsError::NameNotFound(info)
            | CsError::NonConvergence(info)
            | CsError::SolverInfeasible(info)
            | CsError::SolverError(info)
            | CsError::InvalidInput(info)
            | CsError::Serde(info) => info,
        }
    }

    /// Builds a [`CsError::DuplicateName`] for the given arc name.
    pub fn duplicate_name(name: &str) -> Self {
        CsError::DuplicateName(
            ErrorInfo::new("duplicate-name", "an arc with this name already exists")
                .with_context("name", name)
                .with_hint("pick a different arc name"),
        )
    }

    /// Builds a [`CsError::NameNotFound`] for the given arc name.
    pub fn name_not_found(name: &str) -> Self {
        CsError::NameNotFound(
            ErrorInfo::new("name-not-found", "no arc with this name exists").with_context("name", name),
        )
    }

    /// Returns `true` when the error reports a missing or duplicate name.
    pub fn is_name_error(&self) -> bool {
        matches!(self, CsError::DuplicateName(_) | CsError::NameNotFound(_))
    }
}
