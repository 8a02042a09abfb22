//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 看板 ID（由存储分配）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct BoardId(pub i64);

impl BoardId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for BoardId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
