//! # applist - 求职申请清单工具
//!
//! 解析记录求职申请的 XML 文件，按投递状态分成两组打印，
//! 并可按截止日期的临近程度对其彩色标注。
//!
//! ## 用法
//! - `applist <FILE>` - 打印申请清单
//! - `applist -c <FILE>` - 附带截止日期紧迫程度着色
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (XML 解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;

/// 缺少位置参数的退出码，与选项语法错误（clap 的 2）区分
const EXIT_MISSING_ARGUMENT: i32 = 3;

fn main() {
    let cli = Cli::parse();

    let Some(file) = cli.file else {
        utils::output::print_error("Give me an argument!");
        Cli::command().print_help().ok();
        std::process::exit(EXIT_MISSING_ARGUMENT);
    };

    if let Err(e) = commands::run(&file, cli.color) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
