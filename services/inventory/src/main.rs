//! beer-inventory Service - Beer Stock Management

use std::net::SocketAddr;
use std::sync::Arc;

use beer_inventory::api::{self, AppState, OpsState};
use beer_inventory::application::ServiceHandler;
use beer_inventory::infrastructure::persistence::PostgresBeerRepository;
use beerstock_adapter_postgres::{PostgresConfig, create_pool};
use beerstock_common::{RetryConfig, with_retry};
use beerstock_config::AppConfig;
use beerstock_telemetry::{init_metrics, init_tracing, init_tracing_json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!("Initializing {}...", config.app_name);

    // 初始化 Prometheus metrics
    let metrics_handle = init_metrics();

    // 创建 PostgreSQL 连接池（带重试）
    let pg_config = PostgresConfig::new(config.database.url.clone())
        .with_max_connections(config.database.max_connections);
    let pool = with_retry(&RetryConfig::default(), "PostgreSQL connection", || {
        let cfg = pg_config.clone();
        async move { create_pool(&cfg).await }
    })
    .await?;
    info!(
        "PostgreSQL connection pool created (max_connections: {})",
        config.database.max_connections
    );

    // 执行数据库迁移
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    // 组装仓储与业务处理器
    let beer_repo = Arc::new(PostgresBeerRepository::new(pool.clone()));
    let handler = Arc::new(ServiceHandler::new(beer_repo));

    // 构建路由
    let app = api::beer_routes()
        .with_state(AppState::new(handler))
        .merge(api::ops_routes(OpsState {
            pool,
            metrics: metrics_handle,
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting beer-inventory service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
