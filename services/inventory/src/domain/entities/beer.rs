//! 啤酒聚合根

use beerstock_common::AuditInfo;
use beerstock_domain_core::{AggregateRoot, Entity};
use beerstock_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::domain::enums::BeerStyle;
use crate::domain::value_objects::{BeerId, BeerName};

/// 啤酒聚合根
///
/// 库存数量始终满足 `0 <= quantity <= max`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beer {
    /// 啤酒 ID
    id: BeerId,
    /// 名称（业务主键）
    name: BeerName,
    /// 品牌
    brand: String,
    /// 风格
    style: BeerStyle,
    /// 最大库存容量
    max: i32,
    /// 当前库存数量
    quantity: i32,
    /// 审计信息
    audit_info: AuditInfo,
}

impl Beer {
    /// 创建新啤酒
    pub fn new(
        name: BeerName,
        brand: impl Into<String>,
        style: BeerStyle,
        max: i32,
        quantity: i32,
    ) -> Self {
        Self {
            id: BeerId::new(),
            name,
            brand: brand.into(),
            style,
            max,
            quantity,
            audit_info: AuditInfo::new(),
        }
    }

    /// 从持久化数据重建聚合
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: BeerId,
        name: BeerName,
        brand: String,
        style: BeerStyle,
        max: i32,
        quantity: i32,
        audit_info: AuditInfo,
    ) -> Self {
        Self {
            id,
            name,
            brand,
            style,
            max,
            quantity,
            audit_info,
        }
    }

    pub fn name(&self) -> &BeerName {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn style(&self) -> BeerStyle {
        self.style
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// 剩余可入库容量
    pub fn remaining_capacity(&self) -> i32 {
        self.max - self.quantity
    }

    /// 增加库存
    ///
    /// 超过最大容量时拒绝
    pub fn increment(&mut self, delta: i32) -> AppResult<()> {
        let after = self.quantity + delta;
        if after > self.max {
            return Err(AppError::validation(format!(
                "啤酒 {} 入库 {} 超过最大库存容量 {}",
                self.name, delta, self.max
            )));
        }
        self.quantity = after;
        self.touch();
        Ok(())
    }

    /// 减少库存
    ///
    /// 低于零时拒绝，减到正好为零是允许的
    pub fn decrement(&mut self, delta: i32) -> AppResult<()> {
        let after = self.quantity - delta;
        if after < 0 {
            return Err(AppError::validation(format!(
                "啤酒 {} 出库 {} 超过当前库存数量 {}",
                self.name, delta, self.quantity
            )));
        }
        self.quantity = after;
        self.touch();
        Ok(())
    }
}

impl Entity for Beer {
    type Id = BeerId;

    fn id(&self) -> &BeerId {
        &self.id
    }
}

impl AggregateRoot for Beer {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}
