//! 街道地址 / 编号转换
//!
//! "I02W" → "i o two west"，"Route 66" → "route sixty six"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeral::tables::tail;
use crate::numeral::{CardinalConverter, DigitConverter};

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<upper>[A-Z.]*)|(?P<lower>[a-zA-Z]*))(?P<link>[ -]*)(?P<number>[0-9]+)(?P<suffix>[NESWnesw])?",
    )
    .unwrap()
});

/// 地址转换器
pub struct AddressConverter;

impl AddressConverter {
    pub fn convert(text: &str) -> String {
        let token = text.trim();

        let caps = match ADDRESS_RE.captures(token) {
            Some(caps) => caps,
            None => return token.to_string(),
        };

        let mut parts: Vec<String> = Vec::new();

        let lower = caps.name("lower").map_or("", |m| m.as_str());
        let upper = caps.name("upper").map_or("", |m| m.as_str());
        if !lower.is_empty() {
            parts.push(lower.to_lowercase());
        } else {
            // 大写缩写逐字母读
            parts.extend(
                upper
                    .chars()
                    .filter(|c| *c != '.')
                    .map(|c| c.to_ascii_lowercase().to_string()),
            );
        }

        let link = caps.name("link").map_or("", |m| m.as_str());
        let number = caps.name("number").map_or("", |m| m.as_str());

        let paired = (number.len() == 3
            && (!link.is_empty() || number.ends_with('0') || number.starts_with('0')))
            || number.len() == 2;

        if paired {
            let hundreds = tail(number, 3, 2);
            if !hundreds.is_empty() {
                parts.push(DigitConverter::convert(hundreds));
            }
            if tail(number, 2, 1) == "0" {
                parts.push("o".to_string());
                parts.push(DigitConverter::convert(tail(number, 1, 0)));
            } else {
                parts.push(CardinalConverter::convert(tail(number, 2, 0)));
            }
        } else {
            parts.push(DigitConverter::convert(number));
        }

        if let Some(suffix) = caps.name("suffix") {
            let direction = match suffix.as_str().to_ascii_lowercase().as_str() {
                "n" => "north",
                "e" => "east",
                "s" => "south",
                _ => "west",
            };
            parts.push(direction.to_string());
        }

        let end = caps.get(0).map_or(0, |m| m.end());
        let remainder = token[end..].trim();
        if !remainder.is_empty() {
            parts.push(remainder.to_lowercase());
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_prefix() {
        assert_eq!(AddressConverter::convert("I02W"), "i o two west");
        assert_eq!(AddressConverter::convert("A.1"), "a one");
    }

    #[test]
    fn test_word_prefix() {
        assert_eq!(AddressConverter::convert("Route 66"), "route sixty six");
        assert_eq!(AddressConverter::convert("Highway 101"), "highway one o one");
    }

    #[test]
    fn test_long_number_spelled() {
        assert_eq!(AddressConverter::convert("B1234"), "b one two three four");
        assert_eq!(AddressConverter::convert("M123"), "m one two three");
    }

    #[test]
    fn test_three_digits_with_zero() {
        assert_eq!(AddressConverter::convert("A320"), "a three twenty");
    }

    #[test]
    fn test_remainder_appended() {
        assert_eq!(AddressConverter::convert("US 66 Alt"), "u s sixty six alt");
    }

    #[test]
    fn test_no_number_passes_through() {
        assert_eq!(AddressConverter::convert("Main"), "Main");
    }
}
