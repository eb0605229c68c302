//! Unified error types for index-view.
//!
//! The table state machine itself never fails: malformed columns render as
//! blank cells and out-of-range pages only disable navigation. Errors live at
//! the edges, where documents are loaded, data sources are queried and
//! notification feeds are polled.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for index-view operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IndexViewError {
    /// Errors while loading an index document
    #[error("Failed to load index document: {context}")]
    Document {
        context: String,
        #[source]
        source: DocumentErrorKind,
    },

    /// Errors raised by a data source while fetching a page
    #[error("Data source request failed: {context}")]
    Source {
        context: String,
        #[source]
        source: SourceErrorKind,
    },

    /// Errors raised by a notification feed
    #[error("Notification feed failed: {context}")]
    Notification {
        context: String,
        #[source]
        source: NotificationErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific document error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocumentErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Duplicate row id: {0}")]
    DuplicateId(String),

    #[error("Duplicate column key: {0}")]
    DuplicateColumn(String),
}

/// Specific data source error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SourceErrorKind {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Specific notification error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NotificationErrorKind {
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Feed unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for index-view operations
pub type Result<T> = std::result::Result<T, IndexViewError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl IndexViewError {
    /// Create a document error with context
    pub fn document(context: impl Into<String>, source: DocumentErrorKind) -> Self {
        Self::Document {
            context: context.into(),
            source,
        }
    }

    /// Create a data source error with context
    pub fn data_source(context: impl Into<String>, source: SourceErrorKind) -> Self {
        Self::Source {
            context: context.into(),
            source,
        }
    }

    /// Create a notification feed error with context
    pub fn notification(context: impl Into<String>, source: NotificationErrorKind) -> Self {
        Self::Notification {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for IndexViewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for IndexViewError {
    fn from(err: serde_json::Error) -> Self {
        Self::document(
            "JSON deserialization",
            DocumentErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error raised while reading a file
/// inside a document load reads `loading employees.json: reading file: ...`.
///
/// ```ignore
/// use index_view::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<IndexViewError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: IndexViewError, new_ctx: &str) -> IndexViewError {
    match err {
        IndexViewError::Document {
            context: existing,
            source,
        } => IndexViewError::Document {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IndexViewError::Source {
            context: existing,
            source,
        } => IndexViewError::Source {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IndexViewError::Notification {
            context: existing,
            source,
        } => IndexViewError::Notification {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IndexViewError::Io {
            path,
            message,
            source,
        } => IndexViewError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        IndexViewError::Config(msg) => IndexViewError::Config(chain_context(new_ctx, &msg)),
        IndexViewError::Validation(msg) => {
            IndexViewError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IndexViewError::document(
            "validating rows",
            DocumentErrorKind::DuplicateId("3".to_string()),
        );
        let display = err.to_string();
        assert!(
            display.contains("index document"),
            "Error message should mention the document: {display}"
        );

        let err = IndexViewError::io(
            "/data/rooms.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("/data/rooms.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(IndexViewError::data_source(
                "base",
                SourceErrorKind::InvalidQuery("per_page must be positive".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(IndexViewError::Source { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(IndexViewError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
