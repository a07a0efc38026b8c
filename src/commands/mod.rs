//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `parsers/`, `models/`, `utils/`
//! - 子模块: report

pub mod report;

use crate::error::Result;
use std::path::Path;

/// 执行命令
pub fn run(file: &Path, color: bool) -> Result<()> {
    report::execute(file, color)
}
