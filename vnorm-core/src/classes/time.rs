//! 时间转换模块
//!
//! 三种写法：
//! - "hh(:mm)(am|pm)"：  "5:30pm" → "five thirty p m"，"13:00" → "thirteen hundred"
//! - "(hh:)mm:ss(.ms)"： "1:02:03" → "one hour two minutes and three seconds"
//! - "(am|pm)hh"：       "PM3" → "three p m"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeral::CardinalConverter;

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<hour>[0-9]{1,2}) *(?:[:.] *(?P<minute>[0-9]{1,2}))? *(?P<suffix>[a-zA-Z. ]*)$")
        .unwrap()
});

static FULL_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<hour>[0-9]{1,2}) *:)? *(?P<minute>[0-9]{1,2})(?: *: *(?P<seconds>[0-9]{1,2})(?: *[.] *(?P<millis>[0-9]{1,2}))?)? *(?P<suffix>[a-zA-Z. ]*)$",
    )
    .unwrap()
});

static AMPM_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?P<suffix>[a-zA-Z. ]*)(?P<hour>[0-9]{1,2})").unwrap());

/// 时间转换器
pub struct TimeConverter;

impl TimeConverter {
    pub fn convert(text: &str) -> String {
        let token = text.trim();

        if let Some(caps) = TIME_RE.captures(token) {
            let hour = &caps["hour"];
            let suffix = caps.name("suffix").map_or("", |m| m.as_str());
            let ampm = Self::is_ampm(suffix);

            let mut parts = vec![Self::hour_words(hour, ampm)];

            match caps.name("minute").map(|m| m.as_str()) {
                Some(minute) if minute != "00" => {
                    if minute.starts_with('0') {
                        parts.push("o".to_string());
                    }
                    parts.push(CardinalConverter::convert(minute));
                }
                _ if !ampm => {
                    let value: u32 = hour.parse().unwrap_or(0);
                    let word = if value > 12 || value == 0 { "hundred" } else { "o'clock" };
                    parts.push(word.to_string());
                }
                _ => {}
            }

            parts.extend(Self::spell_suffix(suffix));
            return parts.join(" ");
        }

        if let Some(caps) = FULL_TIME_RE.captures(token) {
            let mut parts: Vec<String> = Vec::new();
            let millis = caps.name("millis").map(|m| m.as_str());

            if let Some(hour) = caps.name("hour") {
                Self::push_quantity(&mut parts, hour.as_str(), "hour");
            }
            if let Some(minute) = caps.name("minute") {
                Self::push_quantity(&mut parts, minute.as_str(), "minute");
            }
            if let Some(seconds) = caps.name("seconds") {
                if millis.is_none() {
                    parts.push("and".to_string());
                }
                Self::push_quantity(&mut parts, seconds.as_str(), "second");
            }
            if let Some(millis) = millis {
                parts.push("and".to_string());
                Self::push_quantity(&mut parts, millis, "millisecond");
            }

            parts.extend(Self::spell_suffix(caps.name("suffix").map_or("", |m| m.as_str())));
            return parts.join(" ");
        }

        if let Some(caps) = AMPM_TIME_RE.captures(token) {
            let suffix = caps.name("suffix").map_or("", |m| m.as_str());
            let mut parts = vec![Self::hour_words(&caps["hour"], Self::is_ampm(suffix))];
            parts.extend(Self::spell_suffix(suffix));

            let end = caps.get(0).map_or(0, |m| m.end());
            let remainder = token[end..].trim();
            if !remainder.is_empty() {
                parts.push(remainder.to_lowercase());
            }
            return parts.join(" ");
        }

        token.to_string()
    }

    fn is_ampm(suffix: &str) -> bool {
        let compact: String = suffix
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .collect::<String>()
            .to_lowercase();
        compact.starts_with("am") || compact.starts_with("pm")
    }

    /// 有 am/pm 时按 12 小时制读（"12" 保持不变）
    fn hour_words(hour: &str, ampm: bool) -> String {
        if ampm && hour != "12" {
            let value: u32 = hour.parse().unwrap_or(0);
            CardinalConverter::convert(&(value % 12).to_string())
        } else {
            CardinalConverter::convert(hour)
        }
    }

    fn push_quantity(parts: &mut Vec<String>, value: &str, unit: &str) {
        parts.push(CardinalConverter::convert(value));
        let singular = value.parse::<u32>().map_or(false, |v| v == 1);
        parts.push(if singular { unit.to_string() } else { format!("{}s", unit) });
    }

    /// "p.m." → ["p", "m"]
    fn spell_suffix(suffix: &str) -> Vec<String> {
        suffix
            .to_lowercase()
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .map(|c| c.to_string())
            .collect()
    }
}
