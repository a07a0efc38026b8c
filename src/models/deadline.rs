//! # 截止日期解析与紧迫程度分级
//!
//! 日期解析依次尝试完整月名（"January 31, 2013"）与缩写月名
//! （"Jan 31, 2013"）两种格式；两者都失败时返回固定的回退日期，
//! 让无法解析的截止日期按"早已过期"归入最紧迫一档，而不是报错。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 使用
//! - 使用 `chrono`

use chrono::{Duration, NaiveDate};

/// 依次尝试的日期格式
const DATE_FORMATS: [&str; 2] = ["%B %d, %Y", "%b %d, %Y"];

/// 解析自由文本的截止日期，失败时回退到 2013-12-12
pub fn parse_date(input: &str) -> NaiveDate {
    let input = input.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return date;
        }
    }
    NaiveDate::from_ymd_opt(2013, 12, 12).unwrap_or_default()
}

/// 截止日期紧迫程度，四档
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// 距今超过 14 天
    Far,
    /// 8–14 天
    Soon,
    /// 4–7 天
    Imminent,
    /// 3 天以内、已过期或解析失败回退
    Critical,
}

impl Urgency {
    /// 按严格大于比较分级；恰好落在阈值上的日期归入更紧迫的一档
    pub fn classify(deadline: NaiveDate, today: NaiveDate) -> Self {
        if deadline > today + Duration::days(14) {
            Urgency::Far
        } else if deadline > today + Duration::days(7) {
            Urgency::Soon
        } else if deadline > today + Duration::days(3) {
            Urgency::Imminent
        } else {
            Urgency::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_full_month_name() {
        let parsed = parse_date("January 31, 2013");
        assert_eq!(parsed, date(2013, 1, 31));
    }

    #[test]
    fn test_parse_abbreviated_month_name() {
        let parsed = parse_date("Jan 31, 2013");
        assert_eq!(parsed, date(2013, 1, 31));
    }

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        let parsed = parse_date("  March 5, 2014\n");
        assert_eq!(parsed, date(2014, 3, 5));
    }

    #[test]
    fn test_parse_unrecognized_falls_back() {
        assert_eq!(parse_date("sometime next week"), date(2013, 12, 12));
        assert_eq!(parse_date("2013-01-31"), date(2013, 12, 12));
        assert_eq!(parse_date(""), date(2013, 12, 12));
    }

    #[test]
    fn test_classify_far() {
        let today = date(2013, 6, 1);
        assert_eq!(Urgency::classify(date(2013, 6, 16), today), Urgency::Far);
        assert_eq!(Urgency::classify(date(2014, 1, 1), today), Urgency::Far);
    }

    #[test]
    fn test_classify_boundaries_fall_into_more_urgent_bucket() {
        let today = date(2013, 6, 1);
        // 恰好 14/7/3 天，严格大于比较使其落入更紧迫一档
        assert_eq!(Urgency::classify(date(2013, 6, 15), today), Urgency::Soon);
        assert_eq!(Urgency::classify(date(2013, 6, 8), today), Urgency::Imminent);
        assert_eq!(Urgency::classify(date(2013, 6, 4), today), Urgency::Critical);
    }

    #[test]
    fn test_classify_soon_and_imminent() {
        let today = date(2013, 6, 1);
        assert_eq!(Urgency::classify(date(2013, 6, 9), today), Urgency::Soon);
        assert_eq!(Urgency::classify(date(2013, 6, 5), today), Urgency::Imminent);
    }

    #[test]
    fn test_classify_past_deadline_is_critical() {
        let today = date(2013, 6, 1);
        assert_eq!(Urgency::classify(date(2013, 5, 1), today), Urgency::Critical);
        assert_eq!(Urgency::classify(today, today), Urgency::Critical);
    }

    #[test]
    fn test_fallback_date_classifies_as_critical_today() {
        // 回退日期远在过去，任何晚于它的"今天"都会归入最紧迫一档
        let today = date(2026, 8, 6);
        assert_eq!(
            Urgency::classify(parse_date("garbage"), today),
            Urgency::Critical
        );
    }
}
