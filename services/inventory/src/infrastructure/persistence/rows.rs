//! 数据库行类型

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// beers 表行
#[derive(Debug, FromRow)]
pub struct BeerRow {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub style: String,
    pub max_quantity: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
