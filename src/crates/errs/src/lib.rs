//! Structured domain errors with gRPC status translation.
//!
//! This crate provides a small, chainable error value for service code: a
//! machine-readable [`Code`], a human-readable message, an operation label,
//! and an optional wrapped cause. Layers wrap errors as they return up the
//! call stack, building an audit trail without losing the original failure;
//! the gRPC boundary collapses the trail into a sanitized [`tonic::Status`].
//!
//! # Building and wrapping errors
//!
//! ```rust
//! use errs::{error_code, Code, DomainError};
//!
//! fn create_user(username: &str) -> errs::Result<()> {
//!     if username.is_empty() {
//!         return Err(DomainError::invalid("Username is required").into());
//!     }
//!     Ok(())
//! }
//!
//! let err = create_user("").unwrap_err();
//! assert_eq!(error_code(Some(&err)), Some(Code::Invalid));
//! ```
//!
//! # Translating at the transport boundary
//!
//! Internal failures are hidden from callers; validation, lookup, and
//! auth failures pass through:
//!
//! ```rust
//! use errs::{to_status, DomainError, Error};
//!
//! let err: Error = DomainError::wrap("userService.createUser", "syntax error at near 'INSERT'").into();
//! let status = to_status(&err);
//! assert_eq!(status.code(), tonic::Code::Internal);
//! assert_eq!(status.message(), "Internal server error");
//! ```

pub mod code;
pub mod error;
pub mod grpc;

// Re-export commonly used types
pub use code::{Code, ParseCodeError};
pub use error::{error_code, error_message, BoxError, DomainError, Error, Result};
pub use grpc::to_status;
