//! Business logic handler

use std::sync::Arc;

use beerstock_common::PagedResult;
use beerstock_domain_core::Entity;
use beerstock_errors::{AppError, AppResult};
use tracing::info;

use crate::domain::entities::Beer;
use crate::domain::repositories::BeerRepository;
use crate::domain::value_objects::{BeerId, BeerName};
use crate::infrastructure::observability::metrics;

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    beer_repo: Arc<dyn BeerRepository>,
}

impl ServiceHandler {
    pub fn new(beer_repo: Arc<dyn BeerRepository>) -> Self {
        Self { beer_repo }
    }

    /// 创建啤酒
    pub async fn create_beer(&self, cmd: CreateBeerCommand) -> AppResult<Beer> {
        info!("Creating beer: {}", cmd.name);

        // 1. 验证命令
        cmd.validate()?;
        let name =
            BeerName::new(cmd.name.clone()).map_err(|e| AppError::validation(e.to_string()))?;

        // 2. 检查名称是否已注册
        if self.beer_repo.exists_by_name(&name).await? {
            return Err(AppError::conflict(format!("啤酒 {} 已注册", name)));
        }

        // 3. 创建并保存聚合
        let beer = Beer::new(name, cmd.brand, cmd.style, cmd.max, cmd.quantity);
        self.beer_repo.save(&beer).await?;

        metrics::record_beer_created(beer.style().as_str());
        info!("Beer created successfully: {}", beer.id());
        Ok(beer)
    }

    /// 按名称获取啤酒
    pub async fn get_beer_by_name(&self, query: GetBeerByNameQuery) -> AppResult<Beer> {
        let name =
            BeerName::new(query.name).map_err(|e| AppError::validation(e.to_string()))?;

        self.beer_repo
            .find_by_name(&name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("啤酒 {} 未注册", name)))
    }

    /// 列表查询
    pub async fn list_beers(&self, query: ListBeersQuery) -> AppResult<PagedResult<Beer>> {
        self.beer_repo.list(query.pagination).await
    }

    /// 删除啤酒
    pub async fn delete_beer(&self, cmd: DeleteBeerCommand) -> AppResult<()> {
        let beer = self.find_beer(&cmd.beer_id).await?;
        self.beer_repo.delete(beer.id()).await?;

        info!("Beer deleted: {}", cmd.beer_id);
        Ok(())
    }

    /// 入库
    pub async fn increment_stock(&self, cmd: AdjustStockCommand) -> AppResult<Beer> {
        cmd.validate()?;

        let mut beer = self.find_beer(&cmd.beer_id).await?;
        let result = beer.increment(cmd.quantity);
        metrics::record_stock_adjustment("in", result.is_ok());
        result?;
        self.beer_repo.update(&beer).await?;

        info!(
            beer_id = %cmd.beer_id,
            delta = cmd.quantity,
            quantity = beer.quantity(),
            "Stock incremented"
        );
        Ok(beer)
    }

    /// 出库
    pub async fn decrement_stock(&self, cmd: AdjustStockCommand) -> AppResult<Beer> {
        cmd.validate()?;

        let mut beer = self.find_beer(&cmd.beer_id).await?;
        let result = beer.decrement(cmd.quantity);
        metrics::record_stock_adjustment("out", result.is_ok());
        result?;
        self.beer_repo.update(&beer).await?;

        info!(
            beer_id = %cmd.beer_id,
            delta = cmd.quantity,
            quantity = beer.quantity(),
            "Stock decremented"
        );
        Ok(beer)
    }

    async fn find_beer(&self, id: &BeerId) -> AppResult<Beer> {
        self.beer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("啤酒 {} 不存在", id)))
    }
}
