//! HTTP 响应封装

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::AppError;

/// 结果码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Success,
    Invalid,
    NotFound,
    Unauthorized,
    InternalServer,
}

impl ResultCode {
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Invalid => "invalid request",
            Self::NotFound => "not found",
            Self::Unauthorized => "unauthorized",
            Self::InternalServer => "internal server error",
        }
    }
}

/// 统一响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result_code: ResultCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            result_code: ResultCode::Success,
            message: ResultCode::Success.default_message().to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self {
            result_code: ResultCode::Success,
            message: ResultCode::Success.default_message().to_string(),
            data: None,
        }
    }

    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            result_code: code,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            let problem = self.to_problem_details();
            error!(
                status = problem.status,
                title = %problem.title,
                detail = %problem.detail,
                "Request failed"
            );
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ApiResponse::error(self.result_code(), self.public_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::not_found("board not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["result_code"], "NOT_FOUND");
        assert_eq!(body["message"], "board not found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_database_error_hides_detail() {
        let response = AppError::database("connection reset by peer").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["result_code"], "INTERNAL_SERVER");
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let response = ApiResponse::success(4_i64).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["result_code"], "SUCCESS");
        assert_eq!(body["data"], 4);
    }
}
