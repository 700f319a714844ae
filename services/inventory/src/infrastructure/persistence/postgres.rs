//! PostgreSQL repository implementation

use async_trait::async_trait;
use beerstock_common::{PagedResult, Pagination};
use beerstock_domain_core::{AggregateRoot, Entity};
use beerstock_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::Beer;
use crate::domain::repositories::BeerRepository;
use crate::domain::value_objects::{BeerId, BeerName};

use super::converters::beer_from_row;
use super::rows::BeerRow;

pub struct PostgresBeerRepository {
    pool: PgPool,
}

impl PostgresBeerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BeerRepository for PostgresBeerRepository {
    async fn find_by_id(&self, id: &BeerId) -> AppResult<Option<Beer>> {
        let row = sqlx::query_as::<_, BeerRow>(
            r#"
            SELECT id, name, brand, style, max_quantity, quantity, created_at, updated_at
            FROM beers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询啤酒失败: {}", e)))?;

        row.map(beer_from_row).transpose()
    }

    async fn find_by_name(&self, name: &BeerName) -> AppResult<Option<Beer>> {
        let row = sqlx::query_as::<_, BeerRow>(
            r#"
            SELECT id, name, brand, style, max_quantity, quantity, created_at, updated_at
            FROM beers
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询啤酒失败: {}", e)))?;

        row.map(beer_from_row).transpose()
    }

    async fn exists_by_name(&self, name: &BeerName) -> AppResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM beers WHERE name = $1)")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("检查啤酒名称失败: {}", e)))?;

        Ok(exists.0)
    }

    async fn save(&self, beer: &Beer) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO beers (id, name, brand, style, max_quantity, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(beer.id().0)
        .bind(beer.name().as_str())
        .bind(beer.brand())
        .bind(beer.style().as_str())
        .bind(beer.max())
        .bind(beer.quantity())
        .bind(beer.audit_info().created_at)
        .bind(beer.audit_info().updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // 并发创建同名啤酒时由唯一索引兜底
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict(format!("啤酒 {} 已注册", beer.name()))
            }
            e => AppError::database(format!("保存啤酒失败: {}", e)),
        })?;

        Ok(())
    }

    async fn update(&self, beer: &Beer) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE beers SET
                brand = $1,
                style = $2,
                max_quantity = $3,
                quantity = $4,
                updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(beer.brand())
        .bind(beer.style().as_str())
        .bind(beer.max())
        .bind(beer.quantity())
        .bind(beer.audit_info().updated_at)
        .bind(beer.id().0)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("更新啤酒失败: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("啤酒不存在".to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &BeerId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM beers WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("删除啤酒失败: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("啤酒不存在".to_string()));
        }

        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> AppResult<PagedResult<Beer>> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM beers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("统计啤酒数量失败: {}", e)))?;

        let rows = sqlx::query_as::<_, BeerRow>(
            r#"
            SELECT id, name, brand, style, max_quantity, quantity, created_at, updated_at
            FROM beers
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.page_size as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询啤酒列表失败: {}", e)))?;

        let beers = rows
            .into_iter()
            .map(beer_from_row)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PagedResult::new(beers, total.0 as u64, &pagination))
    }
}
