//! Translation of domain errors into gRPC transport errors.
//!
//! The transport boundary is where an error chain collapses into a
//! [`tonic::Status`]: a status code from the fixed code table plus either the
//! full chain rendering or, for internal errors, a fixed generic message.
//! Internal detail never crosses the boundary; callers inside the process can
//! still inspect the full chain through [`Display`](std::fmt::Display) and
//! the resolution functions.

use tonic::Status;

use crate::code::Code;
use crate::error::{DomainError, Error};

/// Message sent over the wire in place of internal error detail.
const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Translate an error into a [`tonic::Status`].
///
/// Foreign errors map to [`tonic::Code::Unknown`] with their own display
/// string, unmodified, so unexpected failures stay diagnosable. Domain errors
/// map the code on the translated node through the fixed table; an `Internal`
/// (or absent) code replaces the rendered chain with a generic message.
///
/// ```rust
/// use errs::{to_status, DomainError};
///
/// let err = DomainError::invalid("Age must be >= 18").into();
/// let status = to_status(&err);
/// assert_eq!(status.code(), tonic::Code::InvalidArgument);
/// assert_eq!(status.message(), "<invalid> Age must be >= 18");
/// ```
pub fn to_status(err: &Error) -> Status {
    let domain = match err {
        Error::Domain(domain) => domain,
        Error::Opaque(opaque) => return Status::unknown(opaque.to_string()),
    };

    let code = match domain.code() {
        Some(code) => code.grpc(),
        None => tonic::Code::Internal,
    };

    let message = match domain.code() {
        None | Some(Code::Internal) => {
            tracing::error!("Internal error hidden from transport: {}", err);
            INTERNAL_SERVER_ERROR.to_string()
        }
        Some(_) => err.to_string(),
    };

    Status::new(code, message)
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        to_status(&err)
    }
}

impl From<DomainError> for Status {
    fn from(err: DomainError) -> Self {
        to_status(&Error::Domain(err))
    }
}
