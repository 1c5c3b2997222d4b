//! 电话号码转换
//!
//! 逐字符读出，空格 / 连字符 / 括号读作停顿标记 "sil"。
//! "x" 读作 "extension"。

use crate::numeral::tables::digit_word;

const SILENCE: &str = "sil";

/// 电话号码转换器
pub struct TelephoneConverter;

impl TelephoneConverter {
    /// # 示例
    /// ```
    /// # use vnorm_core::classes::TelephoneConverter;
    /// assert_eq!(TelephoneConverter::convert("(555) 1200"), "five five five sil one two hundred");
    /// ```
    pub fn convert(text: &str) -> String {
        let mapped: Vec<String> = text
            .to_lowercase()
            .chars()
            .map(|c| match c {
                ' ' | '-' | '(' | ')' => SILENCE.to_string(),
                'x' => "extension".to_string(),
                _ => digit_word(c).map_or_else(|| c.to_string(), str::to_string),
            })
            .collect();

        // 去掉开头和连续的停顿
        let mut words: Vec<String> = Vec::with_capacity(mapped.len());
        for (i, word) in mapped.iter().enumerate() {
            if word == SILENCE && (i == 0 || mapped[i - 1] == SILENCE) {
                continue;
            }
            words.push(word.clone());
        }

        Self::collapse_zeros(&mut words);
        words.join(" ")
    }

    /// 恰好两个 / 三个 "o" 组成的结尾段读作 "hundred" / "thousand"
    ///
    /// 要求前面不是 "o" 或停顿，后面是停顿或结尾。
    fn collapse_zeros(words: &mut Vec<String>) {
        let mut i = 0;
        while i < words.len() {
            let run = words[i..].iter().take_while(|w| *w == "o").count();
            let followed_by_break = i + run >= words.len() || words[i + run] == SILENCE;
            let preceded_by_digit = i == 0 || (words[i - 1] != "o" && words[i - 1] != SILENCE);

            if (run == 2 || run == 3) && followed_by_break && preceded_by_digit {
                let word = if run == 2 { "hundred" } else { "thousand" };
                words[i] = word.to_string();
                words.drain(i + 1..i + run);
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_number() {
        assert_eq!(
            TelephoneConverter::convert("555-0123"),
            "five five five sil o one two three"
        );
    }

    #[test]
    fn test_parentheses_and_leading_silence() {
        assert_eq!(
            TelephoneConverter::convert("(01) 234"),
            "o one sil two three four"
        );
    }

    #[test]
    fn test_hundred_and_thousand() {
        assert_eq!(TelephoneConverter::convert("1-800"), "one sil eight hundred");
        assert_eq!(TelephoneConverter::convert("2000"), "two thousand");
        assert_eq!(TelephoneConverter::convert("20000"), "two o o o o");
    }

    #[test]
    fn test_zeros_after_silence_stay() {
        assert_eq!(TelephoneConverter::convert("1 00"), "one sil o o");
    }

    #[test]
    fn test_extension() {
        assert_eq!(
            TelephoneConverter::convert("555 12 x9"),
            "five five five sil one two sil extension nine"
        );
    }
}
