//! 序数词转换

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeral::cardinal::CardinalConverter;
use crate::numeral::roman::RomanConverter;
use crate::numeral::tables::ordinalize_last_word;

static STANDARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([0-9]+)(th|nd|st|rd)(s?)$").unwrap());

/// 序数词转换器
pub struct OrdinalConverter;

impl OrdinalConverter {
    /// 将序数文本转换为英文序数词
    ///
    /// # 参数
    /// - `text`: "21st"、"3rds"、"1,000th"、"2º" 或罗马数字（"II"、"XIVth"）
    ///
    /// # 返回
    /// - "twenty first"、"thirds"、"the second" 等
    pub fn convert(text: &str) -> String {
        let token: String = text
            .chars()
            .filter(|c| !matches!(c, ',' | ' ' | 'º' | 'ª'))
            .collect();

        let mut prefix = "";
        let mut suffix = String::new();
        let mut number = token.clone();

        if RomanConverter::check_if_roman(&token) {
            let has_ordinal_suffix = ["th", "nd", "st", "rd"]
                .iter()
                .any(|s| token.ends_with(s));
            if !has_ordinal_suffix {
                prefix = "the";
            }
            let (value, possessive) = RomanConverter::convert(&token);
            number = value;
            suffix = possessive;
        } else if let Some(caps) = STANDARD_RE.captures(&token) {
            number = caps[1].to_string();
            suffix = caps[3].to_string();
        }

        let mut result = ordinalize_last_word(&CardinalConverter::convert(&number));

        if !prefix.is_empty() {
            result = format!("{} {}", prefix, result);
        }
        result.push_str(&suffix);
        result
    }
}
