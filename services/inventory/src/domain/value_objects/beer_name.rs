//! 啤酒名称值对象

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 啤酒名称最大长度
const MAX_LENGTH: usize = 200;

/// 啤酒名称错误
#[derive(Debug, Error)]
pub enum BeerNameError {
    #[error("啤酒名称不能为空")]
    Empty,
    #[error("啤酒名称长度不能超过 {MAX_LENGTH} 个字符")]
    TooLong,
}

/// 啤酒名称值对象
///
/// 业务规则:
/// - 不能为空
/// - 最大长度 200 字符
/// - 库存内名称唯一（由仓储层保证）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeerName(String);

impl BeerName {
    /// 创建新的啤酒名称
    pub fn new(name: impl Into<String>) -> Result<Self, BeerNameError> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(BeerNameError::Empty);
        }

        if name.chars().count() > MAX_LENGTH {
            return Err(BeerNameError::TooLong);
        }

        Ok(Self(name))
    }

    /// 获取名称字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 转换为字符串
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BeerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BeerName {
    type Error = BeerNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BeerName {
    type Error = BeerNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_beer_name() {
        let name = BeerName::new("Brahma").unwrap();
        assert_eq!(name.as_str(), "Brahma");
    }

    #[test]
    fn test_trims_whitespace() {
        let name = BeerName::new("  Brahma  ").unwrap();
        assert_eq!(name.as_str(), "Brahma");
    }

    #[test]
    fn test_empty_name() {
        let result = BeerName::new("   ");
        assert!(matches!(result, Err(BeerNameError::Empty)));
    }

    #[test]
    fn test_too_long_name() {
        let long_name = "A".repeat(201);
        let result = BeerName::new(long_name);
        assert!(matches!(result, Err(BeerNameError::TooLong)));
    }
}
