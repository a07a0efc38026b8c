//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `<FILE>`: 申请清单 XML 文件
//! - `-c/--color`: 按截止日期临近程度着色
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/report.rs`

use clap::Parser;
use std::path::PathBuf;

/// applist - 求职申请清单工具
#[derive(Parser)]
#[command(name = "applist")]
#[command(author = "Changlin Li")]
#[command(version)]
#[command(about = "List job applications and color-code their deadlines", long_about = None)]
pub struct Cli {
    /// XML file containing the job applications to report on
    // 缺省时由 main.rs 打印用法并以独立退出码结束，故为 Option
    pub file: Option<PathBuf>,

    /// Highlight deadlines depending on how close they are
    #[arg(short, long, env = "APPLIST_COLOR")]
    pub color: bool,
}
