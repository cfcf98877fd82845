//! # Error Traits
//!
//! Extension methods for attaching context to results and logging failures
//! at the point they are converted into `AppError`.

use crate::{AppError, Result};

/// Extension methods for Result types.
pub trait ResultExt<T> {
    fn with_context<C: ToString>(self, context: C) -> Result<T>;
    fn context<C: ToString>(self, context: C) -> Result<T>
    where
        Self: Sized;
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<C: ToString>(self, context: C) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            err.context(context)
        })
    }

    fn context<C: ToString>(self, context: C) -> Result<T>
    where
        Self: Sized,
    {
        self.with_context(context)
    }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            tracing::error!(error = %err, "Error occurred");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context() {
        let result: Result<i32> = Err(AppError::not_found("User"));
        let result = result.context("Failed to get user");

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().message(),
            "Failed to get user: User"
        );
    }

    #[test]
    fn test_log_error() {
        let result: Result<i32> = Err(AppError::not_found("User"));
        let result = result.log_error();

        assert!(result.is_err());
    }

    #[test]
    fn test_ok_passthrough() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.context("unused").unwrap(), 42);
    }
}
