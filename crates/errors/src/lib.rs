//! dadamda-errors - 统一错误处理
//!
//! 错误在服务层以 `?` 传播，只在 HTTP 边界统一转换为响应

mod response;

pub use response::{ApiResponse, ResultCode};

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid: {0}")]
    Invalid(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::NotFound(_) => ResultCode::NotFound,
            Self::Invalid(_) => ResultCode::Invalid,
            Self::Unauthorized(_) => ResultCode::Unauthorized,
            Self::Internal(_) | Self::Database(_) => ResultCode::InternalServer,
        }
    }

    /// 是否为服务端故障
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Internal(_) | Self::Database(_))
    }

    /// 对外暴露的消息
    ///
    /// 服务端故障的细节只进日志
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::Invalid(msg) | Self::Unauthorized(msg) => msg.clone(),
            Self::Internal(_) | Self::Database(_) => "Internal server error".to_string(),
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type().to_string(),
            title: self.problem_title().to_string(),
            status: self.status_code().as_u16(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "about:blank#not-found",
            Self::Invalid(_) => "about:blank#invalid",
            Self::Unauthorized(_) => "about:blank#unauthorized",
            Self::Internal(_) => "about:blank#internal",
            Self::Database(_) => "about:blank#database",
        }
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Resource Not Found",
            Self::Invalid(_) => "Invalid Request",
            Self::Unauthorized(_) => "Unauthorized",
            Self::Internal(_) => "Internal Server Error",
            Self::Database(_) => "Database Error",
        }
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::invalid("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::database("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_message_is_generic() {
        let err = AppError::database("relation \"boards\" does not exist");
        assert!(err.is_server_error());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::invalid("title must not be blank");
        assert_eq!(err.public_message(), "title must not be blank");
    }

    #[test]
    fn test_problem_details_keeps_detail() {
        let problem = AppError::internal("pool closed").to_problem_details();
        assert_eq!(problem.status, 500);
        assert!(problem.detail.contains("pool closed"));
    }
}
