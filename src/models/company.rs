//! # 申请记录数据模型
//!
//! 把 XML 元素在边界处一次性提取为带可选字段的类型化记录，
//! 之后全部以只读方式使用。可选字段缺失是正常情况而非错误。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `commands/` 使用
//! - 使用 `parsers/xml.rs` 的 Element

use crate::parsers::xml::Element;

/// 一条求职申请记录
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    /// 公司名（XML 中缺失时为空字符串）
    pub name: String,
    /// 是否已投递（applied 属性为 "1"）
    pub applied: bool,
    /// 目标职位
    pub position: Option<Position>,
}

/// 公司下的职位信息，所有字段均可缺省
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    /// 职位名
    pub name: Option<String>,
    /// 投递所需材料
    pub materials: Option<Vec<String>>,
    /// 截止日期（自由文本，展示时才解析）
    pub deadline: Option<String>,
}

impl Company {
    /// 从 XML 元素防御性提取一条记录，缺失字段一律落为默认值
    pub fn from_element(element: &Element) -> Self {
        let name = element
            .child("name")
            .map(|e| e.text().to_string())
            .unwrap_or_default();
        let applied = element.attr("applied") == Some("1");
        let position = element.child("position").map(Position::from_element);

        Company {
            name,
            applied,
            position,
        }
    }
}

impl Position {
    fn from_element(element: &Element) -> Self {
        let name = element.child("name").map(|e| e.text().to_string());
        let materials = element.child("materials").map(|m| {
            m.children_named("item")
                .map(|item| item.text().to_string())
                .collect()
        });
        let deadline = element.child("deadline").map(|e| e.text().to_string());

        Position {
            name,
            materials,
            deadline,
        }
    }
}
