//! 逐位读数
//!
//! "123" → "one two three"，0 读作 "o"

use crate::numeral::tables::digit_word;

/// 逐位读数转换器
pub struct DigitConverter;

impl DigitConverter {
    /// 将数字串逐位读出
    ///
    /// 非数字字符会被忽略。"007" 是唯一的特例，读作 "double o seven"。
    pub fn convert(text: &str) -> String {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits == "007" {
            return "double o seven".to_string();
        }

        digits
            .chars()
            .filter_map(digit_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
