//! 啤酒风格枚举

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 啤酒风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerStyle {
    #[default]
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

/// 未知啤酒风格
#[derive(Debug, Error)]
#[error("未知的啤酒风格: {0}")]
pub struct UnknownBeerStyle(pub String);

impl BeerStyle {
    /// 数据库存储用的编码
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Malzbier => "MALZBIER",
            BeerStyle::Witbier => "WITBIER",
            BeerStyle::Weiss => "WEISS",
            BeerStyle::Ale => "ALE",
            BeerStyle::Ipa => "IPA",
            BeerStyle::Stout => "STOUT",
        }
    }
}

impl std::fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BeerStyle {
    type Err = UnknownBeerStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LAGER" => Ok(BeerStyle::Lager),
            "MALZBIER" => Ok(BeerStyle::Malzbier),
            "WITBIER" => Ok(BeerStyle::Witbier),
            "WEISS" => Ok(BeerStyle::Weiss),
            "ALE" => Ok(BeerStyle::Ale),
            "IPA" => Ok(BeerStyle::Ipa),
            "STOUT" => Ok(BeerStyle::Stout),
            other => Err(UnknownBeerStyle(other.to_string())),
        }
    }
}
