//! # 终端输出工具
//!
//! 提供统一的终端输出样式与截止日期着色。章节标题与分隔线保持
//! 纯文本，ANSI 转义只出现在错误消息（stderr）和按紧迫程度
//! 着色的截止日期上。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 模块使用
//! - 使用 `colored` crate
//! - 使用 `models/deadline.rs` 的 Urgency

use crate::models::Urgency;
use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印章节标题
pub fn print_section(title: &str) {
    println!("{}:", title);
    println!("----------------\n");
}

/// 打印章节之间的分隔线
pub fn print_separator() {
    println!("\n================\n");
}

/// 按紧迫程度为截止日期文本着色
pub fn paint_deadline(text: &str, urgency: Urgency) -> String {
    let painted = match urgency {
        Urgency::Far => text.green(),
        Urgency::Soon => text.blue(),
        Urgency::Imminent => text.yellow(),
        Urgency::Critical => text.red(),
    };
    painted.to_string()
}
