//! Beer queries

use beerstock_common::Pagination;

/// 按名称获取啤酒查询
#[derive(Debug, Clone)]
pub struct GetBeerByNameQuery {
    pub name: String,
}

/// 列表啤酒查询
#[derive(Debug, Clone)]
pub struct ListBeersQuery {
    pub pagination: Pagination,
}
