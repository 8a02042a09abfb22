//! 用户角色

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Guest,
    #[default]
    User,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Guest => "GUEST",
            Role::User => "USER",
        }
    }

    /// 权限键
    pub fn key(&self) -> &'static str {
        match self {
            Role::Guest => "ROLE_GUEST",
            Role::User => "ROLE_USER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GUEST" => Some(Role::Guest),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_keys() {
        assert_eq!(Role::User.key(), "ROLE_USER");
        assert_eq!(Role::Guest.key(), "ROLE_GUEST");
        assert_eq!(Role::from_code("USER"), Some(Role::User));
        assert_eq!(Role::from_code("ROLE_USER"), None);
    }
}
