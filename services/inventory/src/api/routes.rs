//! REST API 路由

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use beerstock_adapter_postgres::check_connection;
use beerstock_common::{PagedResult, Pagination};
use beerstock_errors::{AppError, AppResult};
use beerstock_telemetry::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;

use crate::application::ServiceHandler;
use crate::application::commands::{AdjustStockCommand, CreateBeerCommand, DeleteBeerCommand};
use crate::application::queries::{GetBeerByNameQuery, ListBeersQuery};
use crate::domain::value_objects::BeerId;

use super::dto::{BeerResponse, CreateBeerRequest, ListParams, QuantityRequest};

/// 啤酒 API 状态
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ServiceHandler>,
}

impl AppState {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

/// 啤酒库存 API 路由
pub fn beer_routes() -> Router<AppState> {
    // GET 按名称查找与 DELETE 按 ID 删除共用同一路径段
    Router::new()
        .route("/api/v1/beers", get(list_beers).post(create_beer))
        .route(
            "/api/v1/beers/{key}",
            get(get_beer_by_name).delete(delete_beer),
        )
        .route("/api/v1/beers/{key}/increment", patch(increment_stock))
        .route("/api/v1/beers/{key}/decrement", patch(decrement_stock))
}

async fn create_beer(
    State(state): State<AppState>,
    Json(req): Json<CreateBeerRequest>,
) -> AppResult<(StatusCode, Json<BeerResponse>)> {
    let beer = state
        .handler
        .create_beer(CreateBeerCommand {
            name: req.name,
            brand: req.brand,
            style: req.style,
            max: req.max,
            quantity: req.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(beer.into())))
}

async fn get_beer_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<BeerResponse>> {
    let beer = state
        .handler
        .get_beer_by_name(GetBeerByNameQuery { name })
        .await?;

    Ok(Json(beer.into()))
}

async fn list_beers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PagedResult<BeerResponse>>> {
    let default = Pagination::default();
    let pagination = Pagination {
        page: params.page.unwrap_or(default.page).max(1),
        page_size: params.page_size.unwrap_or(default.page_size).clamp(1, 100),
    };

    let result = state
        .handler
        .list_beers(ListBeersQuery { pagination })
        .await?;

    Ok(Json(result.map(BeerResponse::from)))
}

async fn delete_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let beer_id = parse_beer_id(&id)?;
    state
        .handler
        .delete_beer(DeleteBeerCommand { beer_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn increment_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QuantityRequest>,
) -> AppResult<Json<BeerResponse>> {
    let beer_id = parse_beer_id(&id)?;
    let beer = state
        .handler
        .increment_stock(AdjustStockCommand {
            beer_id,
            quantity: req.quantity,
        })
        .await?;

    Ok(Json(beer.into()))
}

async fn decrement_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QuantityRequest>,
) -> AppResult<Json<BeerResponse>> {
    let beer_id = parse_beer_id(&id)?;
    let beer = state
        .handler
        .decrement_stock(AdjustStockCommand {
            beer_id,
            quantity: req.quantity,
        })
        .await?;

    Ok(Json(beer.into()))
}

fn parse_beer_id(raw: &str) -> AppResult<BeerId> {
    BeerId::from_str(raw).map_err(|_| AppError::validation(format!("无效的啤酒 ID: {}", raw)))
}

// ============================================================================
// 运维路由
// ============================================================================

/// 运维路由状态
#[derive(Clone)]
pub struct OpsState {
    pub pool: PgPool,
    pub metrics: PrometheusHandle,
}

/// 健康检查与 metrics 路由
pub fn ops_routes(state: OpsState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(render_metrics))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<ServiceCheck>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCheck {
    pub name: String,
    pub healthy: bool,
}

async fn readiness_check(State(state): State<OpsState>) -> Json<ReadinessResponse> {
    let database_healthy = check_connection(&state.pool).await.is_ok();

    Json(ReadinessResponse {
        ready: database_healthy,
        checks: vec![ServiceCheck {
            name: "postgres".to_string(),
            healthy: database_healthy,
        }],
    })
}

async fn render_metrics(State(state): State<OpsState>) -> String {
    state.metrics.render()
}
