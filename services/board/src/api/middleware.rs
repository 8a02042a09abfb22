//! 认证中间件

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use dadamda_auth_core::TokenService;
use dadamda_errors::AppError;
use tracing::{debug, warn};

/// 访问令牌请求头
pub const AUTH_TOKEN_HEADER: &str = "X-AUTH-TOKEN";

/// 已认证的调用方
///
/// 由 auth_middleware 注入，业务层以邮箱解析用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// `X-AUTH-TOKEN` 认证中间件
pub async fn auth_middleware(
    State(token_service): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            warn!("Missing auth token header");
            AppError::unauthorized("Authentication required")
        })?;

    let claims = token_service.validate_token(token).map_err(|e| {
        warn!(error = %e, "Token validation failed");
        AppError::unauthorized("Invalid or expired token")
    })?;
    debug!(email = %claims.sub, "Token validated");

    request.extensions_mut().insert(AuthUser {
        email: claims.sub,
        role: claims.role,
    });
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn whoami(user: AuthUser) -> String {
        user.email
    }

    fn app(tokens: Arc<TokenService>) -> Router {
        Router::new()
            .route("/", get(whoami))
            .layer(middleware::from_fn_with_state(tokens, auth_middleware))
    }

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(
            "test_secret",
            3600,
            "dadamda".to_string(),
            "dadamda-web".to_string(),
        ))
    }

    #[tokio::test]
    async fn test_valid_token_injects_user() {
        let tokens = tokens();
        let token = tokens.generate_token("1234@naver.com", "USER").unwrap();

        let req = Request::builder()
            .uri("/")
            .header(AUTH_TOKEN_HEADER, token)
            .body(Body::empty())
            .unwrap();
        let response = app(tokens).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"1234@naver.com");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app(tokens()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let req = Request::builder()
            .uri("/")
            .header(AUTH_TOKEN_HEADER, "aaaaaaa")
            .body(Body::empty())
            .unwrap();
        let response = app(tokens()).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
