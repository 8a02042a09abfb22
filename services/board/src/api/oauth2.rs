//! OAuth2 登录成功处理
//!
//! 授权码交换由上游组件完成，这里只接收已验证的用户属性并签发令牌

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Extension,
    extract::{State, rejection::ExtensionRejection},
    http::{StatusCode, header},
};
use dadamda_auth_core::TokenService;
use dadamda_errors::{AppError, AppResult};
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::enums::Role;

use super::state::AppState;

/// 已验证的 OAuth2 用户
#[derive(Debug, Clone, Default)]
pub struct OAuth2Principal {
    attributes: HashMap<String, Value>,
}

impl OAuth2Principal {
    pub fn new(attributes: HashMap<String, Value>) -> Self {
        Self { attributes }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// 字符串属性，非字符串值视为缺失
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

pub struct OAuth2SuccessHandler {
    token_service: Arc<TokenService>,
    login_redirect_url: String,
}

impl OAuth2SuccessHandler {
    pub fn new(token_service: Arc<TokenService>, login_redirect_url: impl Into<String>) -> Self {
        Self {
            token_service,
            login_redirect_url: login_redirect_url.into(),
        }
    }

    /// 为登录成功的用户签发令牌，返回跳转地址
    pub fn on_authentication_success(&self, principal: &OAuth2Principal) -> AppResult<String> {
        let email = principal
            .attribute("email")
            .filter(|email| !email.is_empty())
            .ok_or_else(|| {
                warn!("OAuth2 principal has no email attribute");
                AppError::unauthorized("OAuth2 principal has no email")
            })?;

        let token = self.token_service.generate_token(email, Role::User.code())?;
        info!(email, "OAuth2 login succeeded, token issued");

        Ok(format!("{}{}", self.login_redirect_url, token))
    }
}

type Found = (StatusCode, [(header::HeaderName, String); 1]);

/// `GET /login/oauth2/success`，以 302 跳转到前端登录页
pub async fn oauth2_success(
    State(state): State<AppState>,
    principal: Result<Extension<OAuth2Principal>, ExtensionRejection>,
) -> AppResult<Found> {
    let Extension(principal) = principal.map_err(|_| {
        warn!("OAuth2 success called without a verified principal");
        AppError::unauthorized("OAuth2 authentication required")
    })?;

    let location = state.oauth2.on_authentication_success(&principal)?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> (OAuth2SuccessHandler, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(
            "secret",
            3600,
            "dadamda".to_string(),
            "dadamda-web".to_string(),
        ));
        (
            OAuth2SuccessHandler::new(tokens.clone(), "https://dadamda.me/login?token="),
            tokens,
        )
    }

    #[test]
    fn test_redirect_carries_valid_token() {
        let (handler, tokens) = handler();
        let principal = OAuth2Principal::default().with_attribute("email", "1234@naver.com");

        let location = handler.on_authentication_success(&principal).unwrap();
        let token = location
            .strip_prefix("https://dadamda.me/login?token=")
            .unwrap();

        let claims = tokens.validate_token(token).unwrap();
        assert_eq!(claims.sub, "1234@naver.com");
        assert_eq!(claims.role, "USER");
    }

    #[test]
    fn test_missing_email_is_unauthorized() {
        let (handler, _) = handler();
        let principal = OAuth2Principal::default().with_attribute("name", "dadamda");

        let err = handler.on_authentication_success(&principal).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_non_string_email_is_missing() {
        let principal = OAuth2Principal::default().with_attribute("email", 42);
        assert_eq!(principal.attribute("email"), None);
    }
}
