//! 基数词转换模块
//!
//! 将阿拉伯数字转换为英文读法
//!
//! 规则：
//! - 从右往左按三位分组，每组附加量级后缀（thousand, million, …）
//! - 不使用 "and"，不使用连字符（"twenty one" 而不是 "twenty-one"）
//! - 全零组不输出任何内容（包括后缀）
//! - 超出 vigintillion 的分组省略后缀

use crate::numeral::roman::RomanConverter;
use crate::numeral::tables::{small_word, teen_word, tens_word, SCALE_SUFFIXES};

/// 基数词转换器
pub struct CardinalConverter;

impl CardinalConverter {
    /// 将数字文本转换为英文基数词
    ///
    /// # 参数
    /// - `text`: 数字文本，可含逗号、空格、负号或罗马数字（例如："-1,234"、"XIV"）
    ///
    /// # 返回
    /// - 英文读法（例如："minus one thousand two hundred thirty four"）
    ///
    /// # 示例
    /// ```
    /// # use vnorm_core::numeral::CardinalConverter;
    /// assert_eq!(CardinalConverter::convert("1234"), "one thousand two hundred thirty four");
    /// ```
    pub fn convert(text: &str) -> String {
        let mut token = text.replace('.', "");

        // 罗马数字先转为十进制，记住所有格后缀
        let mut suffix = String::new();
        if RomanConverter::check_if_roman(&token) {
            let (value, possessive) = RomanConverter::convert(&token);
            token = value;
            suffix = possessive;
        }

        let filtered: String = token
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();

        // 前导负号为奇数个时读 "minus"
        let mut rest = filtered.as_str();
        let mut negative = false;
        while let Some(stripped) = rest.strip_prefix('-') {
            rest = stripped;
            negative = !negative;
        }

        let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();

        let words = if digits.chars().all(|c| c == '0') {
            vec!["zero"]
        } else {
            Self::spell_digits(&digits)
        };

        let mut result = words.join(" ");
        if negative {
            result = format!("minus {}", result);
        }
        result.push_str(&suffix);
        result
    }

    /// 按三位分组读出纯数字串（调用方保证非全零）
    fn spell_digits(digits: &str) -> Vec<&'static str> {
        let bytes = digits.as_bytes();
        let mut words: Vec<&'static str> = Vec::new();
        let mut end = bytes.len();
        let mut depth = 0;

        while end > 0 {
            let start = end.saturating_sub(3);
            let mut chunk = Self::chunk_words(&bytes[start..end]);

            if depth > 0 && !chunk.is_empty() {
                if let Some(scale) = SCALE_SUFFIXES.get(depth - 1) {
                    chunk.push(scale);
                }
            }

            chunk.extend(words);
            words = chunk;

            end = start;
            depth += 1;
        }

        words
    }

    /// 读出一个 1-3 位的分组
    fn chunk_words(chunk: &[u8]) -> Vec<&'static str> {
        let digits: Vec<u8> = chunk.iter().map(|b| b - b'0').collect();
        let mut words = Vec::new();

        let rest = if digits.len() == 3 {
            if let Some(hundred) = small_word(digits[0]) {
                words.push(hundred);
                words.push("hundred");
            }
            &digits[1..]
        } else {
            &digits[..]
        };

        let value = rest.iter().fold(0u8, |acc, d| acc * 10 + d);
        if let Some(teen) = teen_word(value) {
            words.push(teen);
        } else {
            if rest.len() == 2 {
                if let Some(tens) = tens_word(rest[0]) {
                    words.push(tens);
                }
            }
            if let Some(ones) = rest.last().and_then(|d| small_word(*d)) {
                words.push(ones);
            }
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(CardinalConverter::convert("0"), "zero");
        assert_eq!(CardinalConverter::convert("7"), "seven");
        assert_eq!(CardinalConverter::convert("10"), "ten");
        assert_eq!(CardinalConverter::convert("13"), "thirteen");
        assert_eq!(CardinalConverter::convert("21"), "twenty one");
        assert_eq!(CardinalConverter::convert("90"), "ninety");
    }

    #[test]
    fn test_hundreds_without_and() {
        assert_eq!(CardinalConverter::convert("101"), "one hundred one");
        assert_eq!(CardinalConverter::convert("999"), "nine hundred ninety nine");
    }

    #[test]
    fn test_zero_chunks_have_no_suffix() {
        assert_eq!(CardinalConverter::convert("1000000"), "one million");
        assert_eq!(CardinalConverter::convert("1000001"), "one million one");
        assert_eq!(
            CardinalConverter::convert("77,208"),
            "seventy seven thousand two hundred eight"
        );
    }

    #[test]
    fn test_minus_parity() {
        assert_eq!(CardinalConverter::convert("-2"), "minus two");
        assert_eq!(CardinalConverter::convert("--2"), "two");
        assert_eq!(CardinalConverter::convert("---2"), "minus two");
        assert_eq!(CardinalConverter::convert("2-3"), "twenty three");
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(CardinalConverter::convert("000"), "zero");
        assert_eq!(CardinalConverter::convert("00 000"), "zero");
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(CardinalConverter::convert("II"), "two");
        assert_eq!(CardinalConverter::convert("I."), "one");
        assert_eq!(CardinalConverter::convert("IV's"), "four's");
    }

    #[test]
    fn test_beyond_scale_ladder() {
        // 10^66：最高分组超出后缀表，后缀被省略
        let text = format!("1{}", "0".repeat(66));
        assert_eq!(CardinalConverter::convert(&text), "one");

        let text = format!("1{}", "0".repeat(63));
        assert_eq!(CardinalConverter::convert(&text), "one vigintillion");
    }
}
