//! Machine-readable error codes.
//!
//! The code set is closed: five failure classes covering validation, missing
//! resources, authentication, authorization, and everything unexpected
//! (internal). Codes cross process boundaries as fixed strings, so the wire
//! form is part of the contract and must not drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable code classifying a [`DomainError`](crate::DomainError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Code {
    /// Internal or unexpected failure.
    #[serde(rename = "internal")]
    Internal,

    /// Input validation failed.
    #[serde(rename = "invalid")]
    Invalid,

    /// Resource does not exist.
    #[serde(rename = "not found")]
    NotFound,

    /// Insufficient or missing permissions.
    #[serde(rename = "authorization")]
    Authorization,

    /// Authentication required or credentials invalid.
    #[serde(rename = "authentication")]
    Authentication,
}

impl Code {
    /// The wire form of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Internal => "internal",
            Code::Invalid => "invalid",
            Code::NotFound => "not found",
            Code::Authorization => "authorization",
            Code::Authentication => "authentication",
        }
    }

    /// Map this code to its gRPC status code.
    ///
    /// The table is total over the enum; callers translating an error with
    /// no code at all fall back to [`tonic::Code::Internal`] themselves.
    pub fn grpc(&self) -> tonic::Code {
        match self {
            Code::Invalid => tonic::Code::InvalidArgument,
            Code::NotFound => tonic::Code::NotFound,
            Code::Authorization => tonic::Code::PermissionDenied,
            Code::Authentication => tonic::Code::Unauthenticated,
            Code::Internal => tonic::Code::Internal,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized code string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized error code: {0}")]
pub struct ParseCodeError(pub String);

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(Code::Internal),
            "invalid" => Ok(Code::Invalid),
            "not found" => Ok(Code::NotFound),
            "authorization" => Ok(Code::Authorization),
            "authentication" => Ok(Code::Authentication),
            other => Err(ParseCodeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Code::Internal.as_str(), "internal");
        assert_eq!(Code::Invalid.as_str(), "invalid");
        assert_eq!(Code::NotFound.as_str(), "not found");
        assert_eq!(Code::Authorization.as_str(), "authorization");
        assert_eq!(Code::Authentication.as_str(), "authentication");
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(format!("{}", Code::NotFound), "not found");
    }

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("invalid".parse::<Code>().unwrap(), Code::Invalid);
        assert_eq!("not found".parse::<Code>().unwrap(), Code::NotFound);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "conflict".parse::<Code>().unwrap_err();
        assert_eq!(err, ParseCodeError("conflict".to_string()));
        assert_eq!(err.to_string(), "unrecognized error code: conflict");
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&Code::NotFound).unwrap();
        assert_eq!(json, "\"not found\"");

        let code: Code = serde_json::from_str("\"authentication\"").unwrap();
        assert_eq!(code, Code::Authentication);
    }

    #[test]
    fn test_grpc_mapping() {
        assert_eq!(Code::Invalid.grpc(), tonic::Code::InvalidArgument);
        assert_eq!(Code::NotFound.grpc(), tonic::Code::NotFound);
        assert_eq!(Code::Authorization.grpc(), tonic::Code::PermissionDenied);
        assert_eq!(Code::Authentication.grpc(), tonic::Code::Unauthenticated);
        assert_eq!(Code::Internal.grpc(), tonic::Code::Internal);
    }
}
