//! 实体基础 trait

use beerstock_common::AuditInfo;

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 聚合根 trait
pub trait AggregateRoot: Entity {
    fn audit_info(&self) -> &AuditInfo;
    fn audit_info_mut(&mut self) -> &mut AuditInfo;

    /// 状态变更后刷新更新时间
    fn touch(&mut self) {
        self.audit_info_mut().touch();
    }
}
