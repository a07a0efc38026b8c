//! # XML 文档解析器
//!
//! 小型 XML 解析器：把文档解析为元素树（标签、属性、子元素、文本），
//! 并检查基本良构性。不做任何 schema 校验。
//!
//! ## 支持范围
//! - 嵌套元素与自闭合标签
//! - 单/双引号属性
//! - XML 声明、注释、DOCTYPE（跳过）
//! - 五个预定义实体（&amp; &lt; &gt; &quot; &apos;）
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs`, `models/company.rs` 使用
//! - 使用 `regex` crate

use crate::error::{AppError, Result};
use regex::Regex;
use std::collections::HashMap;

/// 一个 XML 元素节点
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// 标签名
    pub tag: String,
    /// 属性表
    pub attributes: HashMap<String, String>,
    /// 直接子元素（按文档顺序）
    pub children: Vec<Element>,
    text: String,
}

impl Element {
    fn new(tag: &str, attributes: HashMap<String, String>) -> Self {
        Element {
            tag: tag.to_string(),
            attributes,
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// 按名字取属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// 第一个指定标签的直接子元素
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// 全部指定标签的直接子元素
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// 去除首尾空白后的文本内容
    pub fn text(&self) -> &str {
        self.text.trim()
    }
}

/// 解析整个文档并返回根元素
pub fn parse_document(content: &str) -> Result<Element> {
    // 标签形如 <name attr="v">、</name>、<name/>；引号内允许出现 '>'
    let tag_re = Regex::new(
        r#"^<(/?)\s*([A-Za-z_][A-Za-z0-9_.:-]*)((?:[^<>"']|"[^"]*"|'[^']*')*?)(/?)>"#,
    )
    .map_err(|e| AppError::Other(format!("Failed to compile XML tag regex: {}", e)))?;
    let attr_re = Regex::new(r#"([A-Za-z_][A-Za-z0-9_.:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .map_err(|e| AppError::Other(format!("Failed to compile XML attribute regex: {}", e)))?;

    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        // '<' 之前的部分都是文本
        match rest.find('<') {
            None => {
                append_text(rest, &mut stack)?;
                break;
            }
            Some(idx) => {
                let (text, tail) = rest.split_at(idx);
                append_text(text, &mut stack)?;
                rest = tail;
            }
        }

        if rest.starts_with("<!--") {
            rest = skip_past(rest, "-->", "comment")?;
        } else if rest.starts_with("<?") {
            rest = skip_past(rest, "?>", "declaration")?;
        } else if rest.starts_with("<!") {
            rest = skip_past(rest, ">", "markup declaration")?;
        } else if let Some(caps) = tag_re.captures(rest) {
            let closing = !caps[1].is_empty();
            let tag = &caps[2];
            let attrs = &caps[3];
            let self_closing = !caps[4].is_empty();

            if closing {
                if self_closing || !attrs.trim().is_empty() {
                    return Err(parse_error(&format!("malformed closing tag </{}>", tag)));
                }
                let element = stack
                    .pop()
                    .ok_or_else(|| parse_error(&format!("closing tag </{}> without opening tag", tag)))?;
                if element.tag != tag {
                    return Err(parse_error(&format!(
                        "mismatched closing tag: expected </{}>, found </{}>",
                        element.tag, tag
                    )));
                }
                attach(element, &mut stack, &mut root)?;
            } else {
                if stack.is_empty() && root.is_some() {
                    return Err(parse_error("multiple root elements"));
                }
                let element = Element::new(tag, parse_attributes(&attr_re, attrs));
                if self_closing {
                    attach(element, &mut stack, &mut root)?;
                } else {
                    stack.push(element);
                }
            }

            let consumed = caps.get(0).map_or(0, |m| m.end());
            rest = &rest[consumed..];
        } else {
            let snippet: String = rest.chars().take(20).collect();
            return Err(parse_error(&format!("malformed tag at '{}'", snippet)));
        }
    }

    if let Some(element) = stack.pop() {
        return Err(parse_error(&format!("unclosed element <{}>", element.tag)));
    }
    root.ok_or_else(|| parse_error("no root element found"))
}

/// 解析开始标签里的属性表
fn parse_attributes(attr_re: &Regex, attrs: &str) -> HashMap<String, String> {
    attr_re
        .captures_iter(attrs)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some((name, unescape(value)))
        })
        .collect()
}

/// 把文本追加到当前打开的元素；根元素之外的非空白文本视为不良构
fn append_text(text: &str, stack: &mut [Element]) -> Result<()> {
    if let Some(top) = stack.last_mut() {
        top.text.push_str(&unescape(text));
    } else if !text.trim().is_empty() {
        return Err(parse_error("text outside of root element"));
    }
    Ok(())
}

/// 已完成的元素挂到父元素下，栈空时即为根元素
fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(parse_error("multiple root elements"));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

/// 跳过到 `end` 标记之后
fn skip_past<'a>(rest: &'a str, end: &str, what: &str) -> Result<&'a str> {
    match rest.find(end) {
        Some(pos) => Ok(&rest[pos + end.len()..]),
        None => Err(parse_error(&format!("unterminated {}", what))),
    }
}

/// 还原五个预定义实体
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn parse_error(reason: &str) -> AppError {
    AppError::ParseError {
        format: "XML".to_string(),
        path: String::new(),
        reason: reason.to_string(),
    }
}
