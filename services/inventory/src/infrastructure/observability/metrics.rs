//! Beer Inventory Metrics
//!
//! 业务指标记录

use metrics::counter;

/// 记录啤酒创建
pub fn record_beer_created(style: &str) {
    let labels = [("style", style.to_string())];
    counter!("beerstock_beers_created_total", &labels).increment(1);
}

/// 记录库存调整
pub fn record_stock_adjustment(direction: &str, success: bool) {
    let labels = [
        ("direction", direction.to_string()),
        ("success", success.to_string()),
    ];
    counter!("beerstock_stock_adjustments_total", &labels).increment(1);
}
