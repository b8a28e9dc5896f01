//! Domain-level error type.
//!
//! These errors are transport agnostic. The HTTP adapter decides how a
//! given code is rendered on the wire; nothing in the domain knows about
//! status codes or response bodies.

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A required field is missing or malformed.
    InvalidRequest,
    /// The referenced user does not exist.
    NotFound,
    /// A unique key collided on create.
    Conflict,
    /// The persistence backend failed, including connectivity loss.
    StoreError,
}

/// Domain error carrying a category and a human-readable message.
///
/// ## Invariants
/// - `message` is non-empty; constructors take `impl Into<String>` and the
///   call sites always pass literal or formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message rendered by adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::StoreError`].
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::not_found("missing"), ErrorCode::NotFound)]
    #[case(Error::conflict("duplicate"), ErrorCode::Conflict)]
    #[case(Error::store("down"), ErrorCode::StoreError)]
    fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[test]
    fn display_renders_message() {
        let error = Error::not_found("User not found");
        assert_eq!(error.to_string(), "User not found");
    }
}
