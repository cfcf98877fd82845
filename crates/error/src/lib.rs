//! # Anvil Error Infrastructure
//!
//! Error types shared across the Anvil store backend.
//!
//! The taxonomy distinguishes the storage failure modes the repositories
//! care about: a missing row (`NotFound`), an unreachable store
//! (`Connectivity`), a uniqueness or foreign-key violation (`Constraint`),
//! and a mutation that touched no rows (`ZeroRowsAffected`). The
//! `From<sea_orm::DbErr>` conversion performs that classification so
//! repository code can propagate with `?` and still hand callers a
//! distinct, inspectable condition.

pub mod traits;

pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("Connectivity: {message}")]
    Connectivity {
        message: String,
    },

    #[error("Constraint: {message}")]
    Constraint {
        message: String,
    },

    #[error("ZeroRowsAffected: the targeted row does not exist at mutation time")]
    ZeroRowsAffected,

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("Migration: {message}")]
    Migration {
        message: String,
    },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a connectivity error.
    #[inline]
    pub fn connectivity(message: impl ToString) -> Self {
        Self::Connectivity {
            message: message.to_string(),
        }
    }

    /// Create a constraint violation error.
    #[inline]
    pub fn constraint(message: impl ToString) -> Self {
        Self::Constraint {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::NotFound {
                ..
            } => http::StatusCode::NOT_FOUND,
            AppError::ZeroRowsAffected => http::StatusCode::NOT_FOUND,
            AppError::Connectivity {
                ..
            } => http::StatusCode::SERVICE_UNAVAILABLE,
            AppError::Constraint {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::Validation {
                ..
            } => http::StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::Connectivity {
                ..
            } => "CONNECTIVITY_ERROR",
            AppError::Constraint {
                ..
            } => "CONSTRAINT_VIOLATION",
            AppError::ZeroRowsAffected => "ZERO_ROWS_AFFECTED",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Migration {
                ..
            } => "MIGRATION_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound {
                message,
            } => message.clone(),
            AppError::Connectivity {
                message,
            } => message.clone(),
            AppError::Constraint {
                message,
            } => message.clone(),
            AppError::ZeroRowsAffected => "The targeted row does not exist at mutation time".to_string(),
            AppError::Validation {
                message,
            } => message.clone(),
            AppError::Internal {
                message,
            } => message.clone(),
            AppError::Database {
                message,
            } => message.clone(),
            AppError::Io {
                message,
            } => message.clone(),
            AppError::Config {
                message,
            } => message.clone(),
            AppError::Migration {
                message,
            } => message.clone(),
        }
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        match self {
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Connectivity {
                message,
            } => {
                Self::Connectivity {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Constraint {
                message,
            } => {
                Self::Constraint {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::ZeroRowsAffected => self,
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: format!("{}: {}", context_msg, message),
                }
            },
            AppError::Migration {
                message,
            } => {
                Self::Migration {
                    message: format!("{}: {}", context_msg, message),
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Classify Sea-ORM database errors into the taxonomy.
///
/// Constraint violations are recognized first via `DbErr::sql_err`, so a
/// foreign-key or uniqueness failure is never reported as a generic
/// database error. Connection failures map to `Connectivity`, and
/// `RecordNotUpdated` (an update that matched no rows) maps to
/// `ZeroRowsAffected`.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        if let Some(sql_err) = err.sql_err() {
            return match sql_err {
                SqlErr::UniqueConstraintViolation(message) => {
                    Self::Constraint {
                        message,
                    }
                },
                SqlErr::ForeignKeyConstraintViolation(message) => {
                    Self::Constraint {
                        message,
                    }
                },
                _ => {
                    Self::Database {
                        message: err.to_string(),
                    }
                },
            };
        }

        match &err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                Self::Connectivity {
                    message: err.to_string(),
                }
            },
            DbErr::RecordNotUpdated => Self::ZeroRowsAffected,
            _ => {
                Self::Database {
                    message: err.to_string(),
                }
            },
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        }
        else {
            messages.join(", ")
        };

        Self::Validation {
            message,
        }
    }
}
