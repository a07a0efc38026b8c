//! # 解析器模块
//!
//! 把申请清单 XML 文件解析为类型化的申请记录序列。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xml

pub mod xml;

use crate::error::{AppError, Result};
use crate::models::Company;
use std::fs;
use std::path::Path;

/// 解析申请清单文件
pub fn parse_applications_file(path: &Path) -> Result<Vec<Company>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_applications_content(&content, &path.display().to_string())
}

/// 从字符串内容解析申请记录，根元素的每个直接子元素即一条记录
pub fn parse_applications_content(content: &str, source: &str) -> Result<Vec<Company>> {
    let root = xml::parse_document(content).map_err(|e| match e {
        // 文档级解析器不知道文件路径，在这里补上
        AppError::ParseError { format, reason, .. } => AppError::ParseError {
            format,
            path: source.to_string(),
            reason,
        },
        other => other,
    })?;

    Ok(root.children.iter().map(Company::from_element).collect())
}
