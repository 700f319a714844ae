//! beerstock-domain-core - 领域核心类型

mod entity;

pub use entity::*;

// Re-export common types
pub use beerstock_common::AuditInfo;
