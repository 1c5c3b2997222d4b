//! 罗马数字解析
//!
//! 只负责检测与求值，读法交给 CardinalConverter / OrdinalConverter

use once_cell::sync::Lazy;
use regex::Regex;

static ROMAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.IVXLCDM]+(?:th|nd|st|rd|'s|s)?$").unwrap());

/// 罗马数字转换器
pub struct RomanConverter;

impl RomanConverter {
    /// 检查最长的空格分段是否为罗马数字
    ///
    /// 允许点号以及 th/nd/st/rd/'s/s 后缀，例如 "II."、"XIVth"、"IIs"
    pub fn check_if_roman(text: &str) -> bool {
        ROMAN_RE.is_match(Self::largest_section(text))
    }

    /// 将罗马数字转换为十进制字符串
    ///
    /// # 返回
    /// - `(十进制值, 后缀)`：原文以 "s" 结尾时后缀为 "'s"，否则为空
    ///
    /// # 示例
    /// ```
    /// # use vnorm_core::numeral::RomanConverter;
    /// assert_eq!(RomanConverter::convert("XIV"), ("14".to_string(), String::new()));
    /// ```
    pub fn convert(text: &str) -> (String, String) {
        let section = Self::largest_section(text);

        let suffix = if section.ends_with('s') {
            "'s".to_string()
        } else {
            String::new()
        };

        // 从右往左扫描：不小于右侧值则加，否则减
        let mut total: i64 = 0;
        let mut prev: i64 = 0;
        for value in section.chars().rev().filter_map(Self::symbol_value) {
            if value >= prev {
                total += value;
            } else {
                total -= value;
            }
            prev = value;
        }

        (total.to_string(), suffix)
    }

    fn symbol_value(ch: char) -> Option<i64> {
        match ch {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        }
    }

    /// 按空格切分后取最长的一段（长度相同时取第一段）
    fn largest_section(text: &str) -> &str {
        let mut best = "";
        let mut best_len = 0;
        for (i, section) in text.split(' ').enumerate() {
            let len = section.chars().count();
            if i == 0 || len > best_len {
                best = section;
                best_len = len;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert!(RomanConverter::check_if_roman("XIV"));
        assert!(RomanConverter::check_if_roman("II."));
        assert!(RomanConverter::check_if_roman("IIs"));
        assert!(RomanConverter::check_if_roman("XIVth"));
        assert!(RomanConverter::check_if_roman("I II"));
        assert!(!RomanConverter::check_if_roman("14"));
        assert!(!RomanConverter::check_if_roman("Xavier"));
        assert!(!RomanConverter::check_if_roman(""));
    }

    #[test]
    fn test_subtractive_decode() {
        assert_eq!(RomanConverter::convert("XIV"), ("14".to_string(), String::new()));
        assert_eq!(RomanConverter::convert("MCMXCIV").0, "1994");
        assert_eq!(RomanConverter::convert("MMMCMXCIX").0, "3999");
        assert_eq!(RomanConverter::convert("IX").0, "9");
    }

    #[test]
    fn test_possessive_suffix() {
        assert_eq!(RomanConverter::convert("IIs"), ("2".to_string(), "'s".to_string()));
        assert_eq!(RomanConverter::convert("IV's"), ("4".to_string(), "'s".to_string()));
    }

    #[test]
    fn test_largest_section_wins() {
        assert_eq!(RomanConverter::convert("II I").0, "2");
        assert_eq!(RomanConverter::convert("II.").0, "2");
    }
}
