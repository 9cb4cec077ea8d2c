// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ProximityError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ProximityError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, ProximityError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown gate '{name}': expected one of not, and, nand, or, nor, xor, nxor")]
    UnknownGate { name: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ProximityError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ProximityError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ProximityError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
