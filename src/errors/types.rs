//! Error type definitions for the media channels service
//!
//! This module defines the error types used throughout the application,
//! from the store layer up to the domain outcomes the web layer reports.

use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

/// Top-level application error type
///
/// Every service operation resolves to one of these. The web layer maps each
/// variant to exactly one HTTP status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository layer errors that carry no domain meaning
    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    /// Missing or malformed input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Uniqueness violations
    #[error("Conflict: {message}")]
    Conflict { resource: String, message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Operation refused because of the resource's current state
    #[error("Forbidden: {message}")]
    Forbidden { resource: String, message: String },
}

/// Kind of database constraint that rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKind::Unique => write!(f, "unique"),
            ConstraintKind::ForeignKey => write!(f, "foreign key"),
        }
    }
}

/// Repository layer specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database errors from SeaORM that are not constraint related
    #[error("Database error: {0}")]
    Database(DbErr),

    /// Constraint violations (unique, foreign key)
    #[error("Constraint violation: {kind} - {message}")]
    ConstraintViolation { kind: ConstraintKind, message: String },

    /// Record not found
    #[error("Record not found: {table} with {field} = {value}")]
    RecordNotFound {
        table: String,
        field: String,
        value: String,
    },
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::ConstraintViolation {
                kind: ConstraintKind::Unique,
                message,
            },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Self::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                message,
            },
            _ if is_sqlite_restrict_violation(&err) => Self::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                message: err.to_string(),
            },
            _ => Self::Database(err),
        }
    }
}

/// SQLite reports `ON DELETE RESTRICT` through SQLITE_CONSTRAINT_TRIGGER (1811)
/// rather than SQLITE_CONSTRAINT_FOREIGNKEY (787), which `sql_err` leaves
/// unclassified. The message text is the same for both.
fn is_sqlite_restrict_violation(err: &DbErr) -> bool {
    matches!(err, DbErr::Exec(_) | DbErr::Query(_))
        && err.to_string().contains("FOREIGN KEY constraint failed")
}

impl RepositoryError {
    /// Create a record not found error for a lookup by id
    pub fn not_found<T: Into<String>, V: ToString>(table: T, id: V) -> Self {
        Self::RecordNotFound {
            table: table.into(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }
}

/// Store failures surface as domain outcomes wherever the database already
/// decided one: a late unique violation is the same conflict the service
/// checks for, and a late foreign key violation on delete is the dependent
/// publications guard.
impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation {
                kind: ConstraintKind::Unique,
                message,
            } => Self::Conflict {
                resource: "channel".to_string(),
                message,
            },
            RepositoryError::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                message,
            } => Self::Forbidden {
                resource: "channel".to_string(),
                message,
            },
            RepositoryError::RecordNotFound { table, value, .. } => Self::NotFound {
                resource: table,
                id: value,
            },
            other => Self::Repository(other),
        }
    }
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::Conflict {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<R: Into<String>, I: ToString>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::Forbidden {
            resource: resource.into(),
            message: message.into(),
        }
    }
}
