//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::LinkshelfError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 链接错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 链接错误 3000-3099
    LinkNotFound = 3000,
    LinkConflict = 3001,
    LinkValidation = 3002,
    LinkDatabaseError = 3005,
}

impl From<&LinkshelfError> for ErrorCode {
    fn from(err: &LinkshelfError) -> Self {
        match err {
            LinkshelfError::Validation(_) => ErrorCode::LinkValidation,
            LinkshelfError::Conflict(_) => ErrorCode::LinkConflict,
            LinkshelfError::NotFound(_) => ErrorCode::LinkNotFound,
            LinkshelfError::Serialization(_) => ErrorCode::BadRequest,
            LinkshelfError::DatabaseConfig(_)
            | LinkshelfError::DatabaseConnection(_)
            | LinkshelfError::DatabaseOperation(_) => ErrorCode::LinkDatabaseError,
            LinkshelfError::FileOperation(_) => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::LinkConflict).unwrap(), "3001");
        let code: ErrorCode = serde_json::from_str("3000").unwrap();
        assert_eq!(code, ErrorCode::LinkNotFound);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ErrorCode::from(&LinkshelfError::validation("x")),
            ErrorCode::LinkValidation
        );
        assert_eq!(
            ErrorCode::from(&LinkshelfError::database_operation("x")),
            ErrorCode::LinkDatabaseError
        );
    }
}
