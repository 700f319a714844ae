//! 行与聚合之间的转换

use std::str::FromStr;

use beerstock_common::AuditInfo;
use beerstock_errors::{AppError, AppResult};

use crate::domain::entities::Beer;
use crate::domain::enums::BeerStyle;
use crate::domain::value_objects::{BeerId, BeerName};

use super::rows::BeerRow;

/// 将数据库行转换为啤酒聚合
///
/// 数据库中的数据应当始终有效，转换失败视为内部错误
pub fn beer_from_row(row: BeerRow) -> AppResult<Beer> {
    let name = BeerName::new(row.name)
        .map_err(|e| AppError::internal(format!("数据库中存在无效的啤酒名称: {}", e)))?;
    let style = BeerStyle::from_str(&row.style)
        .map_err(|e| AppError::internal(format!("数据库中存在无效的啤酒风格: {}", e)))?;

    Ok(Beer::from_parts(
        BeerId::from_uuid(row.id),
        name,
        row.brand,
        style,
        row.max_quantity,
        row.quantity,
        AuditInfo {
            created_at: row.created_at,
            updated_at: row.updated_at,
        },
    ))
}
