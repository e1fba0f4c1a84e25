//! Chainable domain errors.
//!
//! [`DomainError`] is an immutable record of a failure: a machine-readable
//! [`Code`], a human-readable message, the logical operation that produced or
//! forwarded it, and an optional wrapped cause. Layers attach their operation
//! label as an error travels up the call stack, producing a trace-like
//! rendering such as:
//!
//! ```text
//! userService.createUser: userService.addRole: syntax error at near 'INSERT'
//! ```
//!
//! [`Error`] is the sum of a structured [`DomainError`] and an opaque foreign
//! error. Cause chains are walked by pattern matching over this sum, with a
//! foreign error acting as the natural terminator of a chain.

use std::fmt;

use crate::code::Code;

/// Boxed foreign error terminating a cause chain.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for operations returning [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Generic message used when no node in a chain carries a message.
const GENERIC_MESSAGE: &str = "An internal error has occurred";

/// Structured application error.
///
/// All fields are optional and set once at construction; empty strings are
/// treated as absent. Build with the `with_*` methods or the per-code
/// shorthands:
///
/// ```rust
/// use errs::{Code, DomainError};
///
/// let err = DomainError::invalid("Username is required");
/// assert_eq!(err.code(), Some(Code::Invalid));
/// ```
#[derive(Debug, Default)]
pub struct DomainError {
    code: Option<Code>,
    message: Option<String>,
    op: Option<String>,
    cause: Option<Box<Error>>,
}

impl DomainError {
    /// Create an empty error. Usually combined with the `with_*` builders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an internal error with a message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new().with_code(Code::Internal).with_message(message)
    }

    /// Create a validation error with a message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new().with_code(Code::Invalid).with_message(message)
    }

    /// Create a missing-resource error with a message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new().with_code(Code::NotFound).with_message(message)
    }

    /// Create a permission error with a message.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new().with_code(Code::Authorization).with_message(message)
    }

    /// Create an authentication error with a message.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new().with_code(Code::Authentication).with_message(message)
    }

    /// Wrap an underlying error, labeling the operation that forwarded it.
    ///
    /// ```rust
    /// use errs::DomainError;
    ///
    /// let err = DomainError::wrap("userService.addRole", "syntax error at near 'INSERT'");
    /// assert_eq!(err.to_string(), "userService.addRole: syntax error at near 'INSERT'");
    /// ```
    pub fn wrap(op: impl Into<String>, cause: impl Into<Error>) -> Self {
        Self::new().with_op(op).with_cause(cause)
    }

    /// Set the machine-readable code.
    pub fn with_code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the human-readable message. An empty string is treated as absent.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.is_empty()).then_some(message);
        self
    }

    /// Set the operation label. An empty string is treated as absent.
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        let op = op.into();
        self.op = (!op.is_empty()).then_some(op);
        self
    }

    /// Set the wrapped cause.
    pub fn with_cause(mut self, cause: impl Into<Error>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    /// The code set on this node, if any.
    pub fn code(&self) -> Option<Code> {
        self.code
    }

    /// The message set on this node, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The operation label set on this node, if any.
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// Check whether this node carries the given code.
    pub fn is_code(&self, code: Code) -> bool {
        self.code == Some(code)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print the operation label first, then the wrapped cause if there is
        // one; the node's own code and message render only at the end of a
        // chain.
        if let Some(op) = &self.op {
            write!(f, "{}: ", op)?;
        }
        match &self.cause {
            Some(cause) => write!(f, "{}", cause),
            None => {
                if let Some(code) = self.code {
                    write!(f, "<{}> ", code)?;
                }
                if let Some(message) = &self.message {
                    f.write_str(message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Any error flowing through the system.
///
/// An explicit sum over the two kinds of failure a caller can observe, so
/// chain traversal pattern-matches instead of downcasting. An `Opaque` value
/// never wraps further; it is always a leaf.
#[derive(Debug)]
pub enum Error {
    /// Structured error produced by this crate.
    Domain(DomainError),

    /// Foreign error from an underlying library or the standard library.
    Opaque(BoxError),
}

impl Error {
    /// Wrap a foreign error as an opaque leaf.
    pub fn opaque(err: impl Into<BoxError>) -> Self {
        Error::Opaque(err.into())
    }

    /// Check whether this is a structured domain error.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }

    /// The structured domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Error::Domain(err) => Some(err),
            Error::Opaque(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain(err) => fmt::Display::fmt(err, f),
            Error::Opaque(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Domain(err) => std::error::Error::source(err),
            Error::Opaque(err) => std::error::Error::source(err.as_ref()),
        }
    }
}

// Conversions from common error types
impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Error::Domain(err)
    }
}

impl From<BoxError> for Error {
    fn from(err: BoxError) -> Self {
        Error::Opaque(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Opaque(err.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Opaque(Box::new(err))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Opaque(msg.into())
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Opaque(msg.into())
    }
}

/// Resolve the effective code of an error chain.
///
/// `None` resolves to `None`. A node's own code wins over anything deeper in
/// the chain; when no node supplies one, or the chain ends in a foreign
/// error, the result is [`Code::Internal`].
pub fn error_code(err: Option<&Error>) -> Option<Code> {
    let mut current = err?;
    loop {
        match current {
            Error::Domain(e) => {
                if e.code.is_some() {
                    return e.code;
                }
                match e.cause.as_deref() {
                    Some(cause) => current = cause,
                    None => return Some(Code::Internal),
                }
            }
            Error::Opaque(_) => return Some(Code::Internal),
        }
    }
}

/// Resolve the effective human-readable message of an error chain.
///
/// `None` resolves to `None`. A node's own message wins over anything deeper
/// in the chain; when no node supplies one, or the chain ends in a foreign
/// error, the result is a fixed generic message.
pub fn error_message(err: Option<&Error>) -> Option<String> {
    let mut current = err?;
    loop {
        match current {
            Error::Domain(e) => {
                if let Some(message) = &e.message {
                    return Some(message.clone());
                }
                match e.cause.as_deref() {
                    Some(cause) => current = cause,
                    None => return Some(GENERIC_MESSAGE.to_string()),
                }
            }
            Error::Opaque(_) => return Some(GENERIC_MESSAGE.to_string()),
        }
    }
}
