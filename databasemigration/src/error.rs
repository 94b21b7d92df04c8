/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Modeled service faults and the service-wide error type.
//!
//! These shapes describe what the service sends back on a failed call; the
//! transport that performs the call is out of scope here, so the only entry
//! point is parsing a response body via
//! [`crate::json_deser::deser_error`].

use std::fmt;

/// Code and message for an error the client has no model for.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
}

impl ErrorMetadata {
    /// Creates a builder for `ErrorMetadata`.
    pub fn builder() -> error_metadata::Builder {
        error_metadata::Builder::default()
    }

    /// The error code, when the response carried one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message, when the response carried one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("ErrorMetadata");
        if let Some(code) = &self.code {
            out.field("code", code);
        }
        if let Some(message) = &self.message {
            out.field("message", message);
        }
        out.finish()
    }
}

impl std::error::Error for ErrorMetadata {}

/// Builder for [`ErrorMetadata`](crate::error::ErrorMetadata).
pub mod error_metadata {
    /// Builder for [`ErrorMetadata`](crate::error::ErrorMetadata).
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        code: Option<String>,
        message: Option<String>,
    }

    impl Builder {
        /// Sets the error code.
        pub fn code(mut self, input: impl Into<String>) -> Self {
            self.code = Some(input.into());
            self
        }
        /// Sets the error message.
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// Builds the `ErrorMetadata`.
        pub fn build(self) -> crate::error::ErrorMetadata {
            crate::error::ErrorMetadata {
                code: self.code,
                message: self.message,
            }
        }
    }
}

macro_rules! message_fault {
    ($(#[$docs:meta])* $name:ident, $code:literal) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            /// The message the service returned.
            pub message: Option<String>,
        }

        impl $name {
            /// The error code this fault is transmitted as.
            pub const CODE: &'static str = $code;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $code)?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

message_fault!(
    /// The caller does not have the required permissions.
    AccessDeniedFault,
    "AccessDeniedFault"
);
message_fault!(
    /// The resource is in a state that forbids the requested operation.
    InvalidResourceStateFault,
    "InvalidResourceStateFault"
);
message_fault!(
    /// The requested resource does not exist.
    ResourceNotFoundFault,
    "ResourceNotFoundFault"
);
message_fault!(
    /// The quota for this resource kind has been exceeded.
    ResourceQuotaExceededFault,
    "ResourceQuotaExceededFault"
);
message_fault!(
    /// The specified KMS key is disabled or otherwise not accessible.
    KmsKeyNotAccessibleFault,
    "KMSKeyNotAccessibleFault"
);

/// A resource with the requested identifier already exists.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResourceAlreadyExistsFault {
    /// The message the service returned.
    pub message: Option<String>,
    /// The ARN of the conflicting resource.
    pub resource_arn: Option<String>,
}

impl ResourceAlreadyExistsFault {
    /// The error code this fault is transmitted as.
    pub const CODE: &'static str = "ResourceAlreadyExistsFault";
}

impl fmt::Display for ResourceAlreadyExistsFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceAlreadyExistsFault")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResourceAlreadyExistsFault {}

/// Any error the service can return, with unmodeled codes collected under
/// [`Error::Unhandled`].
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// See [`AccessDeniedFault`].
    AccessDeniedFault(AccessDeniedFault),
    /// See [`InvalidResourceStateFault`].
    InvalidResourceStateFault(InvalidResourceStateFault),
    /// See [`KmsKeyNotAccessibleFault`].
    KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
    /// See [`ResourceAlreadyExistsFault`].
    ResourceAlreadyExistsFault(ResourceAlreadyExistsFault),
    /// See [`ResourceNotFoundFault`].
    ResourceNotFoundFault(ResourceNotFoundFault),
    /// See [`ResourceQuotaExceededFault`].
    ResourceQuotaExceededFault(ResourceQuotaExceededFault),
    /// An error the client has no model for.
    Unhandled(ErrorMetadata),
}

impl Error {
    /// The error code, when one was transmitted.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::AccessDeniedFault(_) => Some(AccessDeniedFault::CODE),
            Error::InvalidResourceStateFault(_) => Some(InvalidResourceStateFault::CODE),
            Error::KmsKeyNotAccessibleFault(_) => Some(KmsKeyNotAccessibleFault::CODE),
            Error::ResourceAlreadyExistsFault(_) => Some(ResourceAlreadyExistsFault::CODE),
            Error::ResourceNotFoundFault(_) => Some(ResourceNotFoundFault::CODE),
            Error::ResourceQuotaExceededFault(_) => Some(ResourceQuotaExceededFault::CODE),
            Error::Unhandled(meta) => meta.code(),
        }
    }

    /// The error message, when one was transmitted.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::AccessDeniedFault(err) => err.message.as_deref(),
            Error::InvalidResourceStateFault(err) => err.message.as_deref(),
            Error::KmsKeyNotAccessibleFault(err) => err.message.as_deref(),
            Error::ResourceAlreadyExistsFault(err) => err.message.as_deref(),
            Error::ResourceNotFoundFault(err) => err.message.as_deref(),
            Error::ResourceQuotaExceededFault(err) => err.message.as_deref(),
            Error::Unhandled(meta) => meta.message(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccessDeniedFault(err) => err.fmt(f),
            Error::InvalidResourceStateFault(err) => err.fmt(f),
            Error::KmsKeyNotAccessibleFault(err) => err.fmt(f),
            Error::ResourceAlreadyExistsFault(err) => err.fmt(f),
            Error::ResourceNotFoundFault(err) => err.fmt(f),
            Error::ResourceQuotaExceededFault(err) => err.fmt(f),
            Error::Unhandled(meta) => meta.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let err = Error::ResourceNotFoundFault(ResourceNotFoundFault {
            message: Some("Endpoint not found".to_string()),
        });
        assert_eq!(
            "ResourceNotFoundFault: Endpoint not found",
            err.to_string()
        );
        assert_eq!(Some("ResourceNotFoundFault"), err.code());
        assert_eq!(Some("Endpoint not found"), err.message());
    }
}
