use std::fmt;

use actix_web::http::StatusCode;
use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkshelfError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Serialization(String),
    FileOperation(String),
}

impl LinkshelfError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkshelfError::Validation(_) => "E001",
            LinkshelfError::Conflict(_) => "E002",
            LinkshelfError::NotFound(_) => "E003",
            LinkshelfError::DatabaseConfig(_) => "E004",
            LinkshelfError::DatabaseConnection(_) => "E005",
            LinkshelfError::DatabaseOperation(_) => "E006",
            LinkshelfError::Serialization(_) => "E007",
            LinkshelfError::FileOperation(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkshelfError::Validation(_) => "Validation Error",
            LinkshelfError::Conflict(_) => "Conflict",
            LinkshelfError::NotFound(_) => "Resource Not Found",
            LinkshelfError::DatabaseConfig(_) => "Database Configuration Error",
            LinkshelfError::DatabaseConnection(_) => "Database Connection Error",
            LinkshelfError::DatabaseOperation(_) => "Database Operation Error",
            LinkshelfError::Serialization(_) => "Serialization Error",
            LinkshelfError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkshelfError::Validation(msg)
            | LinkshelfError::Conflict(msg)
            | LinkshelfError::NotFound(msg)
            | LinkshelfError::DatabaseConfig(msg)
            | LinkshelfError::DatabaseConnection(msg)
            | LinkshelfError::DatabaseOperation(msg)
            | LinkshelfError::Serialization(msg)
            | LinkshelfError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status used when this error reaches the request boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkshelfError::Validation(_) | LinkshelfError::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            LinkshelfError::Conflict(_) => StatusCode::CONFLICT,
            LinkshelfError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkshelfError {}

// 便捷的构造函数
impl LinkshelfError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Validation(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::NotFound(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::FileOperation(msg.into())
    }
}

// 唯一约束冲突单独映射为 Conflict，其余数据库错误统一为 DatabaseOperation
impl From<DbErr> for LinkshelfError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => LinkshelfError::Conflict(format!(
                "A link with this folder and title already exists ({})",
                detail
            )),
            _ => LinkshelfError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for LinkshelfError {
    fn from(err: std::io::Error) -> Self {
        LinkshelfError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkshelfError {
    fn from(err: serde_json::Error) -> Self {
        LinkshelfError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkshelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            LinkshelfError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LinkshelfError::conflict("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            LinkshelfError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LinkshelfError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_format_simple() {
        let err = LinkshelfError::not_found("Link 7 not found");
        assert_eq!(err.format_simple(), "Resource Not Found: Link 7 not found");
        assert_eq!(err.to_string(), err.format_simple());
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LinkshelfError::validation(""),
            LinkshelfError::conflict(""),
            LinkshelfError::not_found(""),
            LinkshelfError::database_config(""),
            LinkshelfError::database_connection(""),
            LinkshelfError::database_operation(""),
            LinkshelfError::serialization(""),
            LinkshelfError::file_operation(""),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_plain_db_error_maps_to_operation() {
        let err: LinkshelfError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, LinkshelfError::DatabaseOperation(_)));
    }
}
