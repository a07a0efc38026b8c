//! # 数据模型模块
//!
//! 定义申请记录与截止日期紧迫程度的数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/` 使用
//! - 子模块: company, deadline

pub mod company;
pub mod deadline;

pub use company::{Company, Position};
pub use deadline::Urgency;
