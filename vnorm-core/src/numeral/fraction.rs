//! 分数转换模块
//!
//! 两种形式：
//! - Unicode 分数字符："½" → "one half"，"1½" → "one and a half"
//! - 斜杠分数："3/4" → "three quarters"，"8 1/2" → "eight and a half"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeral::cardinal::CardinalConverter;
use crate::numeral::tables::{is_unit_magnitude, ordinalize_last_word};

/// Unicode 分数字符
struct VulgarFraction {
    glyph: char,
    /// 有整数部分时使用（"one and a half"）
    prepended: &'static str,
    /// 单独出现时使用（"one half"）
    single: &'static str,
    text: &'static str,
}

const VULGAR_FRACTIONS: &[VulgarFraction] = &[
    VulgarFraction { glyph: '½', prepended: "a", single: "one", text: "half" },
    VulgarFraction { glyph: '⅓', prepended: "a", single: "one", text: "third" },
    VulgarFraction { glyph: '⅔', prepended: "two", single: "two", text: "thirds" },
    VulgarFraction { glyph: '¼', prepended: "a", single: "one", text: "quarter" },
    VulgarFraction { glyph: '¾', prepended: "three", single: "three", text: "quarters" },
    VulgarFraction { glyph: '⅕', prepended: "a", single: "one", text: "fifth" },
    VulgarFraction { glyph: '⅖', prepended: "two", single: "two", text: "fifths" },
    VulgarFraction { glyph: '⅗', prepended: "three", single: "three", text: "fifths" },
    VulgarFraction { glyph: '⅘', prepended: "four", single: "four", text: "fifths" },
    VulgarFraction { glyph: '⅙', prepended: "a", single: "one", text: "sixth" },
    VulgarFraction { glyph: '⅚', prepended: "five", single: "five", text: "sixths" },
    VulgarFraction { glyph: '⅐', prepended: "a", single: "one", text: "seventh" },
    VulgarFraction { glyph: '⅛', prepended: "an", single: "one", text: "eighth" },
    VulgarFraction { glyph: '⅜', prepended: "three", single: "three", text: "eighths" },
    VulgarFraction { glyph: '⅝', prepended: "five", single: "five", text: "eighths" },
    VulgarFraction { glyph: '⅞', prepended: "seven", single: "seven", text: "eighths" },
    VulgarFraction { glyph: '⅑', prepended: "a", single: "one", text: "ninth" },
    VulgarFraction { glyph: '⅒', prepended: "a", single: "one", text: "tenth" },
];

/// 所有分数字符，供其他模块拼接正则字符类
pub const FRACTION_GLYPHS: &str = "½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞⅑⅒";

// "100 000/24" 中的空格分组视为一个数
static SLASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(-?[0-9]{1,3}(?: [0-9]{3})+|-?[0-9]+) */ *(-?[0-9]{1,3}(?: [0-9]{3})+|-?[0-9]+)")
        .unwrap()
});

/// 分数转换器
pub struct FractionConverter;

impl FractionConverter {
    /// 将分数文本转换为英文读法
    ///
    /// 无法识别时原样返回（去掉逗号）
    pub fn convert(text: &str) -> String {
        let token = text.replace(',', "");

        if let Some(fraction) = Self::find_glyph(&token) {
            let remainder: String = token.chars().filter(|c| *c != fraction.glyph).collect();
            return if remainder.trim().is_empty() {
                format!("{} {}", fraction.single, fraction.text)
            } else {
                format!(
                    "{} and {} {}",
                    CardinalConverter::convert(&remainder),
                    fraction.prepended,
                    fraction.text
                )
            };
        }

        let caps = match SLASH_RE.captures(&token) {
            Some(caps) => caps,
            None => return token,
        };

        let numerator = caps[1].replace(' ', "");
        let denominator = caps[2].replace(' ', "");
        let singular = is_unit_magnitude(&numerator);

        let numerator_text = CardinalConverter::convert(&numerator);
        let denominator_text = match (denominator.as_str(), singular) {
            ("1", _) => "over one".to_string(),
            ("2", true) => "half".to_string(),
            ("2", false) => "halves".to_string(),
            ("4", true) => "quarter".to_string(),
            ("4", false) => "quarters".to_string(),
            _ => {
                let mut ordinal = ordinalize_last_word(&CardinalConverter::convert(&denominator));
                if !singular {
                    ordinal.push('s');
                }
                ordinal
            }
        };
        let result = format!("{} {}", numerator_text, denominator_text);

        let remainder = SLASH_RE.replace_all(&token, "");
        let remainder = remainder.trim();
        if remainder.is_empty() {
            return result;
        }

        // "one eighth" → "an eighth"
        let fraction_part = match result.strip_prefix("one ") {
            Some(rest) if rest.starts_with(&['a', 'e', 'i', 'o', 'u'][..]) => format!("an {}", rest),
            Some(rest) => format!("a {}", rest),
            None => result,
        };
        format!("{} and {}", CardinalConverter::convert(remainder), fraction_part)
    }

    fn find_glyph(token: &str) -> Option<&'static VulgarFraction> {
        token
            .chars()
            .find_map(|c| VULGAR_FRACTIONS.iter().find(|f| f.glyph == c))
    }
}
