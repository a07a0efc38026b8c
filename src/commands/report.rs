//! # report 命令实现
//!
//! 读取申请清单，按是否已投递分成两节打印。
//!
//! ## 功能
//! - "Already Applied" 一节只打印公司与职位名
//! - "Not Yet Applied" 一节附带材料清单与截止日期
//! - 可选按截止日期紧迫程度着色
//!
//! ## 依赖关系
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`, `utils/partition.rs`

use crate::error::Result;
use crate::models::deadline::parse_date;
use crate::models::{Company, Urgency};
use crate::parsers;
use crate::utils::output;
use crate::utils::partition::binary_partition;

use chrono::{Local, NaiveDate};
use std::path::Path;

/// 单条记录的显示选项
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// 打印截止日期行
    pub deadline: bool,
    /// 打印材料清单行
    pub materials: bool,
    /// 按紧迫程度着色
    pub color: bool,
}

/// 执行 report 命令
pub fn execute(file: &Path, color: bool) -> Result<()> {
    // 彩色输出只在这一条路径上出现，Windows 虚拟终端也只在此启用
    #[cfg(windows)]
    if color {
        colored::control::set_virtual_terminal(true).ok();
    }

    let companies = parsers::parse_applications_file(file)?;
    let (applied, pending) = binary_partition(companies, |c| c.applied);
    let today = Local::now().date_naive();

    output::print_section("Already Applied");
    for company in &applied {
        print!("{}", format_company(company, DisplayOptions::default(), today));
    }

    output::print_separator();

    output::print_section("Not Yet Applied");
    let options = DisplayOptions {
        deadline: true,
        materials: true,
        color,
    };
    for company in &pending {
        print!("{}", format_company(company, options, today));
    }

    Ok(())
}

/// 格式化一条记录；缺失的可选字段按占位处理，绝不报错
pub fn format_company(company: &Company, options: DisplayOptions, today: NaiveDate) -> String {
    let position_name = company
        .position
        .as_ref()
        .and_then(|p| p.name.as_deref())
        .unwrap_or("");
    let mut out = format!("{} - {}\n", company.name, position_name);

    if options.materials {
        if let Some(materials) = company.position.as_ref().and_then(|p| p.materials.as_ref()) {
            out.push_str(&format!("    Requirements: {:?}\n", materials));
        }
    }

    if options.deadline {
        let rendered = match company.position.as_ref().and_then(|p| p.deadline.as_deref()) {
            Some(deadline) => {
                let deadline = deadline.trim();
                if options.color {
                    let urgency = Urgency::classify(parse_date(deadline), today);
                    output::paint_deadline(deadline, urgency)
                } else {
                    deadline.to_string()
                }
            }
            None => "Not Given".to_string(),
        };
        out.push_str(&format!("    Deadline: {}\n", rendered));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 1, 1).unwrap()
    }

    fn full_options() -> DisplayOptions {
        DisplayOptions {
            deadline: true,
            materials: true,
            color: false,
        }
    }

    fn company() -> Company {
        Company {
            name: "Acme".to_string(),
            applied: false,
            position: Some(Position {
                name: Some("Engineer".to_string()),
                materials: Some(vec!["CV".to_string(), "Cover letter".to_string()]),
                deadline: Some("January 31, 2013".to_string()),
            }),
        }
    }

    #[test]
    fn test_format_full_detail() {
        let out = format_company(&company(), full_options(), today());
        assert_eq!(
            out,
            "Acme - Engineer\n    Requirements: [\"CV\", \"Cover letter\"]\n    Deadline: January 31, 2013\n"
        );
    }

    #[test]
    fn test_format_terse_is_name_line_only() {
        // 已投递一节的记录即使带截止日期也只打印名字行
        let out = format_company(&company(), DisplayOptions::default(), today());
        assert_eq!(out, "Acme - Engineer\n");
    }

    #[test]
    fn test_format_without_materials_has_no_requirements_line() {
        let mut company = company();
        if let Some(position) = company.position.as_mut() {
            position.materials = None;
        }
        let out = format_company(&company, full_options(), today());
        assert!(!out.contains("Requirements:"));
        assert!(out.contains("Deadline: January 31, 2013"));
    }

    #[test]
    fn test_format_missing_deadline_prints_not_given() {
        let mut company = company();
        if let Some(position) = company.position.as_mut() {
            position.deadline = None;
        }
        let out = format_company(&company, full_options(), today());
        assert!(out.contains("    Deadline: Not Given\n"));
    }

    #[test]
    fn test_format_without_position() {
        let company = Company {
            name: "Acme".to_string(),
            applied: false,
            position: None,
        };
        let out = format_company(&company, full_options(), today());
        assert_eq!(out, "Acme - \n    Deadline: Not Given\n");
    }

    #[test]
    fn test_format_color_keeps_deadline_text() {
        let mut options = full_options();
        options.color = true;
        let out = format_company(&company(), options, today());
        // 着色与否都必须保留原始日期文本
        assert!(out.contains("January 31, 2013"));
    }

    #[test]
    fn test_format_trims_deadline_whitespace() {
        let mut company = company();
        if let Some(position) = company.position.as_mut() {
            position.deadline = Some("  Jan 31, 2013  ".to_string());
        }
        let out = format_company(&company, full_options(), today());
        assert!(out.contains("    Deadline: Jan 31, 2013\n"));
    }
}
