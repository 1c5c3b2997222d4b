//! 货币金额转换模块
//!
//! "$1.56" → "one dollar and fifty six cents"
//! "€3.5 million" → "three point five million euros"
//! "Rs.12.83 crore" → "twelve point eight three crore rupees"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{Currency, Lexicon};
use crate::numeral::{CardinalConverter, DigitConverter};

// 在反转后的文本上匹配，保证以最后一个点为小数点
static REVERSED_DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)(-?[0-9]*)\.([0-9]+)(.*)$").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)(-?[0-9]+)(.*)$").unwrap());

static SCALE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(quattuordecillion|septendecillion|novemdecillion|quindecillion|octodecillion|tredecillion|sexdecillion|duodecillion|vigintillion|quadrillion|quintillion|undecillion|sextillion|septillion|nonillion|decillion|octillion|thousand|trillion|million|billion|crores|crore|lakhs|lakh|lacs|bn|cr|k|m|b|t)(.*)$",
    )
    .unwrap()
});

/// 量级缩写展开
fn expand_scale(scale: &str) -> String {
    let lower = scale.to_lowercase();
    let expanded = match lower.as_str() {
        "k" => "thousand",
        "m" => "million",
        "bn" | "b" => "billion",
        "t" => "trillion",
        "cr" | "crores" => "crore",
        "lakhs" | "lacs" => "lakh",
        _ => return lower,
    };
    expanded.to_string()
}

/// 货币金额转换器
pub struct MoneyConverter;

impl MoneyConverter {
    /// 将货币金额转换为英文读法
    ///
    /// # 参数
    /// - `text`: 金额文本（"$1.56"、"US$75,000"、"16 DM"）
    /// - `lexicon`: 提供货币表
    pub fn convert(text: &str, lexicon: &Lexicon) -> String {
        let token: String = text.chars().filter(|c| *c != ',' && *c != ' ').collect();

        let mut before = String::new();
        let mut number = String::new();
        let mut decimal = String::new();
        let mut after = String::new();

        let reversed: String = token.chars().rev().collect();
        if let Some(caps) = REVERSED_DECIMAL_RE.captures(&reversed) {
            let unreverse = |i: usize| -> String {
                caps.get(i).map_or(String::new(), |m| m.as_str().chars().rev().collect())
            };
            after = unreverse(1);
            decimal = unreverse(2);
            number = unreverse(3);
            before = unreverse(4);
        } else if let Some(caps) = NUMBER_RE.captures(&token) {
            before = caps[1].to_string();
            number = caps[2].to_string();
            after = caps[3].to_string();
        }

        let mut currency: Option<&Currency> = None;

        if !before.is_empty() {
            let before = before.to_lowercase();
            currency = lexicon.currency(&before).or_else(|| {
                before
                    .chars()
                    .last()
                    .and_then(|c| lexicon.currency(&c.to_string()))
            });
        }

        let mut scale = String::new();
        if !after.is_empty() {
            let lower = after.to_lowercase();
            if let Some(found) = lexicon.currency(&lower) {
                currency = Some(found);
                after.clear();
            } else {
                if let Some(caps) = SCALE_RE.captures(&after) {
                    scale = expand_scale(&caps[1]);
                    after = caps[2].to_string();
                }

                let lower = after.to_lowercase();
                if let Some(found) = lexicon.currency(&lower) {
                    currency = Some(found);
                    after.clear();
                } else if let Some((found, rest)) = lexicon.currency_prefix(&lower) {
                    currency = Some(found);
                    after = rest.to_string();
                }
            }
        }

        let has_decimal = !decimal.is_empty() && decimal.chars().any(|c| c != '0');
        let mut parts: Vec<String> = Vec::new();

        match currency {
            Some(Currency {
                number: major,
                decimal: Some(minor),
            }) if scale.is_empty() => {
                // "x dollars and y cents"
                if !number.is_empty() && (number != "0" || decimal.is_empty()) {
                    parts.push(CardinalConverter::convert(&number));
                    parts.push(major.pick(number == "1").to_string());
                    if has_decimal {
                        parts.push("and".to_string());
                    }
                }
                if has_decimal {
                    let cents = format!("{:0<2}", decimal);
                    parts.push(CardinalConverter::convert(&cents));
                    parts.push(minor.pick(cents == "01").to_string());
                }
            }
            _ => {
                // "x point y million dollars"
                if !number.is_empty() {
                    parts.push(CardinalConverter::convert(&number));
                }
                if has_decimal {
                    parts.push("point".to_string());
                    parts.push(DigitConverter::convert(&decimal));
                }
                if !scale.is_empty() {
                    parts.push(scale.clone());
                }
                if let Some(currency) = currency {
                    let singular = number == "1" && decimal.is_empty() && scale.is_empty();
                    parts.push(currency.number.pick(singular).to_string());
                }
            }
        }

        if !after.is_empty() {
            parts.push(after.to_lowercase());
        }

        parts.join(" ")
    }
}
