//! REST API 数据传输对象

use beerstock_domain_core::{AggregateRoot, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Beer;
use crate::domain::enums::BeerStyle;

/// 创建啤酒请求
///
/// `type` 字段名保留了既有客户端使用的 JSON 格式
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeerRequest {
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub style: BeerStyle,
    pub max: i32,
    #[serde(default)]
    pub quantity: i32,
}

/// 库存调整请求
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i32,
}

/// 列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// 啤酒响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeerResponse {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub style: BeerStyle,
    pub max: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id().0,
            name: beer.name().as_str().to_string(),
            brand: beer.brand().to_string(),
            style: beer.style(),
            max: beer.max(),
            quantity: beer.quantity(),
            created_at: beer.audit_info().created_at,
            updated_at: beer.audit_info().updated_at,
        }
    }
}
