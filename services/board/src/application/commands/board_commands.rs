//! Board commands

use dadamda_errors::{AppError, AppResult};
use serde::Deserialize;

/// 标题最大长度（字符）
pub const MAX_TITLE_LENGTH: usize = 100;

/// 描述最大长度（字符）
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

fn validate_title_and_description(title: &str, description: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::invalid("Board title must not be blank"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::invalid(format!(
            "Board title must be at most {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(AppError::invalid(format!(
            "Board description must be at most {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// 创建看板命令
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoardCommand {
    pub tag: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CreateBoardCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_title_and_description(&self.title, &self.description)
    }
}

/// 修改看板命令
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBoardCommand {
    pub tag: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateBoardCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_title_and_description(&self.title, &self.description)
    }
}

/// 修改看板内容命令
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBoardContentsCommand {
    pub contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str, description: &str) -> CreateBoardCommand {
        CreateBoardCommand {
            tag: "ENTERTAINMENT_ART".to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(create("   ", "").validate().is_err());
        assert!(create("", "").validate().is_err());
    }

    #[test]
    fn test_length_limits_count_chars() {
        assert!(create(&"가".repeat(MAX_TITLE_LENGTH), "").validate().is_ok());
        assert!(create(&"가".repeat(MAX_TITLE_LENGTH + 1), "").validate().is_err());
        assert!(create("t", &"d".repeat(MAX_DESCRIPTION_LENGTH)).validate().is_ok());
        assert!(create("t", &"d".repeat(MAX_DESCRIPTION_LENGTH + 1)).validate().is_err());
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let cmd: UpdateBoardCommand =
            serde_json::from_str(r#"{"tag":"LIFE_SHOPPING","title":"t"}"#).unwrap();
        assert_eq!(cmd.description, "");
        assert!(cmd.validate().is_ok());
    }
}
