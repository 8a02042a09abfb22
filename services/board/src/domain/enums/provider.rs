//! OAuth2 登录提供方

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Provider {
    Google,
    Kakao,
    Naver,
}

impl Provider {
    pub fn code(&self) -> &'static str {
        match self {
            Provider::Google => "GOOGLE",
            Provider::Kakao => "KAKAO",
            Provider::Naver => "NAVER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GOOGLE" => Some(Provider::Google),
            "KAKAO" => Some(Provider::Kakao),
            "NAVER" => Some(Provider::Naver),
            _ => None,
        }
    }
}
