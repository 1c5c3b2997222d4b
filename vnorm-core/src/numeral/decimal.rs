//! 小数转换
//!
//! "3.14" → "three point one four"
//! "0.5 million" → "zero point five million"
//! "3.66E-49" → "three point six six times ten to the minus forty nine"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeral::cardinal::CardinalConverter;
use crate::numeral::digit::DigitConverter;
use crate::numeral::tables::SCALE_SUFFIXES;

static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?[0-9]*)\.([0-9]+)(.*)$").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-?[0-9]+)(.*)$").unwrap());

static SCALE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^ *({})", SCALE_SUFFIXES.join("|"))).unwrap());

static EXPONENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *E(-?[0-9]+)").unwrap());

/// 小数转换器
pub struct DecimalConverter;

impl DecimalConverter {
    /// 将小数文本转换为英文读法
    ///
    /// 支持 "x.y"、".y"、"x" 三种形式，后面可跟量级词或科学计数法后缀。
    /// 整数部分走 CardinalConverter，小数部分逐位读（唯一例外："x.0" 读作 "point zero"）。
    pub fn convert(text: &str) -> String {
        let token = text.replace(',', "");

        let mut number = "";
        let mut decimal = "";
        let mut rest = token.as_str();

        if let Some(caps) = DECIMAL_RE.captures(&token) {
            number = caps.get(1).map_or("", |m| m.as_str());
            decimal = caps.get(2).map_or("", |m| m.as_str());
            rest = caps.get(3).map_or("", |m| m.as_str());
        } else if let Some(caps) = NUMBER_RE.captures(&token) {
            number = caps.get(1).map_or("", |m| m.as_str());
            rest = caps.get(2).map_or("", |m| m.as_str());
        }

        let suffix = if let Some(caps) = SCALE_RE.captures(rest) {
            caps[1].to_string()
        } else if let Some(caps) = EXPONENT_RE.captures(rest) {
            format!("times ten to the {}", CardinalConverter::convert(&caps[1]))
        } else {
            String::new()
        };

        let mut parts: Vec<String> = Vec::new();

        if !number.is_empty() {
            parts.push(CardinalConverter::convert(number));
        }

        if !decimal.is_empty() {
            parts.push("point".to_string());
            if decimal == "0" && !number.is_empty() && suffix.is_empty() {
                parts.push("zero".to_string());
            } else {
                parts.push(DigitConverter::convert(decimal));
            }
        }

        if !suffix.is_empty() {
            parts.push(suffix);
        }

        parts.join(" ")
    }
}
