//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Request validation errors
//! - 2xxx: Resource errors
//! - 3xxx: Storage errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Validation Errors (1xxx) =====

    /// Bad request / invalid parameters.
    pub const BAD_REQUEST: Self = Self(1001);

    /// Request body is not a valid task collection.
    pub const MALFORMED_BODY: Self = Self(1002);

    /// Missing or non-integer task id.
    pub const INVALID_TASK_ID: Self = Self(1003);

    /// Request body exceeds the size limit.
    pub const PAYLOAD_TOO_LARGE: Self = Self(1004);

    // ===== Resource Errors (2xxx) =====

    /// Task not found.
    pub const TASK_NOT_FOUND: Self = Self(2001);

    /// HTTP method not supported on this resource.
    pub const METHOD_NOT_ALLOWED: Self = Self(2002);

    // ===== Storage Errors (3xxx) =====

    /// Storage backend error.
    pub const STORAGE_ERROR: Self = Self(3001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ErrorCode::BAD_REQUEST,
            ErrorCode::MALFORMED_BODY,
            ErrorCode::INVALID_TASK_ID,
            ErrorCode::PAYLOAD_TOO_LARGE,
            ErrorCode::TASK_NOT_FOUND,
            ErrorCode::METHOD_NOT_ALLOWED,
            ErrorCode::STORAGE_ERROR,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert_eq!(ErrorCode::TASK_NOT_FOUND.as_i32(), 2001);
    }
}
