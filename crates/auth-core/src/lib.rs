//! dadamda-auth-core - 认证核心库
//!
//! JWT 签发与校验

use chrono::{Duration, Utc};
use dadamda_errors::{AppError, AppResult};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Role key
    pub role: String,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
    /// JWT ID
    pub jti: String,
    /// Issuer
    #[serde(default)]
    pub iss: String,
    /// Audience
    #[serde(default)]
    pub aud: String,
}

impl Claims {
    pub fn new(
        email: &str,
        role: &str,
        expires_in_secs: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// 令牌主体（邮箱）
    pub fn email(&self) -> &str {
        &self.sub
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Token 服务
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
    issuer: String,
    audience: String,
}

impl TokenService {
    pub fn new(secret: &str, expires_in: i64, issuer: String, audience: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
            issuer,
            audience,
        }
    }

    /// 生成令牌
    pub fn generate_token(&self, email: &str, role: &str) -> AppResult<String> {
        let claims = Claims::new(email, role, self.expires_in, &self.issuer, &self.audience);
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
    }

    /// 验证令牌
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = 0; // 不允许时间偏差

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::unauthorized(format!("Invalid token: {}", e)))?
            .claims;

        if claims.sub.is_empty() {
            return Err(AppError::unauthorized("Token subject missing"));
        }

        if claims.jti.is_empty() {
            return Err(AppError::unauthorized("Token ID (jti) missing"));
        }

        Ok(claims)
    }

    /// 令牌有效期（秒）
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}
