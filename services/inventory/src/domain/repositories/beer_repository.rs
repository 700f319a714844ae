//! 啤酒仓储接口

use async_trait::async_trait;
use beerstock_common::{PagedResult, Pagination};
use beerstock_errors::AppResult;

use crate::domain::entities::Beer;
use crate::domain::value_objects::{BeerId, BeerName};

/// 啤酒仓储接口
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// 根据 ID 查找啤酒
    async fn find_by_id(&self, id: &BeerId) -> AppResult<Option<Beer>>;

    /// 根据名称查找啤酒
    async fn find_by_name(&self, name: &BeerName) -> AppResult<Option<Beer>>;

    /// 检查名称是否已注册
    async fn exists_by_name(&self, name: &BeerName) -> AppResult<bool>;

    /// 保存啤酒（新建）
    async fn save(&self, beer: &Beer) -> AppResult<()>;

    /// 更新啤酒
    async fn update(&self, beer: &Beer) -> AppResult<()>;

    /// 删除啤酒
    async fn delete(&self, id: &BeerId) -> AppResult<()>;

    /// 列表查询
    async fn list(&self, pagination: Pagination) -> AppResult<PagedResult<Beer>>;
}
