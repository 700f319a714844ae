//! Beer commands

use beerstock_errors::{AppError, AppResult};

use crate::domain::enums::BeerStyle;
use crate::domain::value_objects::BeerId;

/// 最大库存容量上限
pub const MAX_CAPACITY: i32 = 500;

/// 单次库存调整上限
pub const MAX_ADJUSTMENT: i32 = 100;

/// 创建啤酒命令
#[derive(Debug, Clone)]
pub struct CreateBeerCommand {
    pub name: String,
    pub brand: String,
    pub style: BeerStyle,
    pub max: i32,
    pub quantity: i32,
}

impl CreateBeerCommand {
    pub fn validate(&self) -> AppResult<()> {
        // 名称由 BeerName 值对象校验，这里校验其余字段

        // 验证品牌
        if self.brand.trim().is_empty() {
            return Err(AppError::validation("品牌不能为空"));
        }
        if self.brand.chars().count() > 200 {
            return Err(AppError::validation("品牌长度不能超过200个字符"));
        }

        // 验证最大库存容量
        if self.max < 1 {
            return Err(AppError::validation("最大库存容量必须大于零"));
        }
        if self.max > MAX_CAPACITY {
            return Err(AppError::validation(format!(
                "最大库存容量不能超过 {}",
                MAX_CAPACITY
            )));
        }

        // 验证初始库存
        if self.quantity < 0 {
            return Err(AppError::validation("初始库存不能为负数"));
        }
        if self.quantity > self.max {
            return Err(AppError::validation("初始库存不能超过最大库存容量"));
        }

        Ok(())
    }
}

/// 库存调整命令（入库/出库共用）
#[derive(Debug, Clone)]
pub struct AdjustStockCommand {
    pub beer_id: BeerId,
    pub quantity: i32,
}

impl AdjustStockCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.quantity < 1 {
            return Err(AppError::validation("调整数量必须大于零"));
        }
        if self.quantity > MAX_ADJUSTMENT {
            return Err(AppError::validation(format!(
                "单次调整数量不能超过 {}",
                MAX_ADJUSTMENT
            )));
        }
        Ok(())
    }
}

/// 删除啤酒命令
#[derive(Debug, Clone)]
pub struct DeleteBeerCommand {
    pub beer_id: BeerId,
}
