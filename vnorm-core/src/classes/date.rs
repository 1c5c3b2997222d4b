//! 日期转换模块
//!
//! 按优先级依次尝试：
//! 1. "DD Month" / "Month DD"
//! 2. "MM-DD-YY(YY)"、"YY(YY)-MM-DD"、"DD-Month-YY(YY)"、"YY(YY)-Month-DD"、"Month-DD-YY(YY)"
//! 3. "DD Month YYYY"、"Month YYYY"、"YYYY"、"YYYYs"、"Month DD, YYYY"
//!
//! 全部不匹配时返回预处理后的文本。

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::numeral::tables::tail;
use crate::numeral::{CardinalConverter, OrdinalConverter};

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|sept|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec";

// 分隔符：- . /，两侧允许空格
const SEP: &str = r" *(?:-|\.|/) *";

static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|wed|thu|fri|sat|sun)\.?")
        .unwrap()
});

// 数字后的序数后缀（"5th"、"22 nd"），不会误伤 "thursday"
static ORDINAL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[0-9] ?(th|nd|rd|st)").unwrap());

static DM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<day>[0-9]{{1,2}}) +(?:of +)?(?P<month>{MONTHS})\.?(?: *(?P<bcsuffix>[A-Z.]+)?)$"
    ))
    .unwrap()
});

static MD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<month>{MONTHS})\.? +(?P<day>[0-9]{{1,2}})(?: *(?P<bcsuffix>[A-Z.]+)?)$"
    ))
    .unwrap()
});

static DASH_MDY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<month>[0-9]{{1,2}}){SEP}(?P<day>[0-9]{{1,2}}){SEP}(?P<year>[0-9]{{2,5}})$"
    ))
    .unwrap()
});

static DASH_YMD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<year>[0-9]{{2,5}}){SEP}(?P<month>[0-9]{{1,2}}){SEP}(?P<day>[0-9]{{1,2}})$"
    ))
    .unwrap()
});

static TEXT_DMY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<day>[0-9]{{1,2}}){SEP}(?P<month>{MONTHS}){SEP}(?P<year>[0-9]{{2,5}})$"
    ))
    .unwrap()
});

static TEXT_YMD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<year>[0-9]{{2,5}}){SEP}(?P<month>{MONTHS}){SEP}(?P<day>[0-9]{{1,2}})$"
    ))
    .unwrap()
});

static TEXT_MDY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<month>{MONTHS}){SEP}(?P<day>[0-9]{{1,2}}){SEP}(?P<year>[0-9]{{2,5}})$"
    ))
    .unwrap()
});

static DMY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:(?:(?P<day>[0-9]{{1,2}}) +(?:of +)?)?(?P<month>{MONTHS})\.? +)?(?P<year>[0-9]{{1,5}})(?P<suffix>s?)/?(?: *(?P<bcsuffix>[A-Z.]+)?)$"
    ))
    .unwrap()
});

static MDY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<month>{MONTHS})?\.? *(?P<day>[0-9]{{1,2}})? +(?P<year>[0-9]{{1,5}})(?P<suffix>s?)/?(?: *(?P<bcsuffix>[A-Z.]+)?)$"
    ))
    .unwrap()
});

/// 数字分隔日期格式，按优先级排列
static DASH_FORMATS: Lazy<[&'static Regex; 5]> = Lazy::new(|| {
    [
        &*DASH_MDY_RE,
        &*DASH_YMD_RE,
        &*TEXT_DMY_RE,
        &*TEXT_YMD_RE,
        &*TEXT_MDY_RE,
    ]
});

/// 日期各部分（均已转为读法）
#[derive(Debug, Default)]
struct DateParts {
    weekday: Option<String>,
    day: Option<String>,
    month: Option<String>,
    year: Option<String>,
    era: Option<String>,
    /// true: "the DAY of MONTH YEAR"；false: "MONTH DAY YEAR"
    day_first: bool,
}

impl DateParts {
    fn render(self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.weekday);

        if self.day_first {
            if let Some(day) = self.day {
                parts.push("the".to_string());
                parts.push(day);
                parts.push("of".to_string());
            }
            parts.extend(self.month);
        } else {
            parts.extend(self.month);
            parts.extend(self.day);
        }

        parts.extend(self.year);
        parts.extend(self.era);

        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

/// 日期转换器
pub struct DateConverter;

impl DateConverter {
    /// 将日期文本转换为英文读法
    ///
    /// # 示例
    /// ```
    /// # use vnorm_core::classes::DateConverter;
    /// assert_eq!(DateConverter::convert("5 July 1906"), "the fifth of july nineteen o six");
    /// assert_eq!(DateConverter::convert("1990s"), "nineteen nineties");
    /// ```
    pub fn convert(text: &str) -> String {
        let mut token: String = text
            .chars()
            .filter(|c| *c != ',' && *c != '\'')
            .collect::<String>()
            .trim()
            .to_string();

        // "5th" → "5"，只去掉第一个
        if let Some(m) = ORDINAL_SUFFIX_RE.captures(&token).and_then(|c| c.get(1)) {
            token.replace_range(m.range(), "");
        }

        let mut parts = DateParts {
            day_first: true,
            ..Default::default()
        };

        if let Some(m) = WEEKDAY_RE.captures(&token).and_then(|c| c.get(1)) {
            parts.weekday = Some(Self::weekday_name(m.as_str()));
            let end = WEEKDAY_RE.find(&token).map_or(0, |w| w.end());
            token = token[end..].trim().to_string();
        }

        if token.get(..4).map_or(false, |p| p.eq_ignore_ascii_case("the ")) {
            token = token[4..].to_string();
        }

        // 1. "DD Month" / "Month DD"
        let day_month = DM_RE.captures(&token).or_else(|| {
            let caps = MD_RE.captures(&token);
            if caps.is_some() {
                parts.day_first = false;
            }
            caps
        });
        if let Some(caps) = day_month {
            parts.day = caps.name("day").map(|d| OrdinalConverter::convert(d.as_str()));
            parts.month = caps.name("month").map(|m| Self::month_name(m.as_str()));
            parts.era = Self::era(&caps);
            return parts.render();
        }

        // 2. 分隔符格式
        if let Some(caps) = DASH_FORMATS.iter().find_map(|re| re.captures(&token)) {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let mut day = caps.name("day").map_or("", |m| m.as_str());
            let mut month = caps.name("month").map_or("", |m| m.as_str());
            let year = caps.name("year").map_or("", |m| m.as_str());

            let day_value: u32 = day.parse().unwrap_or(0);
            let month_first_with_large_day = whole.starts_with(month) && day_value > 12;

            match month.parse::<u32>() {
                Ok(month_value) => {
                    let weekday_with_trailing_year = parts.weekday.is_some()
                        && whole.ends_with(year)
                        && month_value <= 12;
                    if month_first_with_large_day || weekday_with_trailing_year {
                        parts.day_first = false;
                    }
                    if month_value > 12 {
                        std::mem::swap(&mut day, &mut month);
                    }
                }
                Err(_) => {
                    if month_first_with_large_day {
                        parts.day_first = false;
                    }
                }
            }

            parts.month = Some(Self::month_name(month));
            parts.year = Some(Self::convert_year(year, false));
            parts.day = Some(OrdinalConverter::convert(day));
            return parts.render();
        }

        // 3. 带年份的格式
        let with_year = DMY_RE.captures(&token).or_else(|| {
            let caps = MDY_RE.captures(&token);
            if caps.is_some() {
                parts.day_first = false;
            }
            caps
        });
        if let Some(caps) = with_year {
            parts.day = caps.name("day").map(|d| OrdinalConverter::convert(d.as_str()));
            parts.month = caps.name("month").map(|m| Self::month_name(m.as_str()));
            let plural = caps.name("suffix").map_or(false, |s| !s.as_str().is_empty());
            parts.year = caps
                .name("year")
                .map(|y| Self::convert_year(y.as_str(), plural));
            parts.era = Self::era(&caps);
            return parts.render();
        }

        token
    }

    /// 年份读法
    ///
    /// # 参数
    /// - `year`: 年份数字串
    /// - `plural`: 是否为年代（"1990s" → "nineteen nineties"）
    pub fn convert_year(year: &str, plural: bool) -> String {
        if year == "00" {
            return "o o".to_string();
        }

        // "x00x" 形式直接按基数读："2001" → "two thousand one"
        if tail(year, 3, 1) == "00" {
            let mut result = CardinalConverter::convert(year);
            if plural {
                if result.ends_with('x') {
                    result.push('e');
                }
                result.push('s');
            }
            return result;
        }

        let mut parts: Vec<String> = Vec::new();

        let century = tail(year, 4, 2);
        if !century.is_empty() {
            parts.push(CardinalConverter::convert(century));
        }

        if tail(year, 2, 0) == "00" {
            parts.push(if plural { "hundreds" } else { "hundred" }.to_string());
            return parts.join(" ");
        }

        // "1906" → "nineteen o six"，三位数 "201" → "two hundred one"
        if tail(year, 2, 1) == "0" {
            if year.len() == 3 {
                parts.push("hundred".to_string());
            } else {
                parts.push("o".to_string());
            }
        }

        let mut last = CardinalConverter::convert(tail(year, 2, 0));
        if plural {
            if let Some(stem) = last.strip_suffix('y') {
                last = format!("{}ies", stem);
            } else if last.ends_with('x') {
                last.push_str("es");
            } else {
                last.push('s');
            }
        }
        parts.push(last);

        parts.join(" ")
    }

    /// 月份读法（缩写和数字月份展开，其余转小写）
    pub fn month_name(month: &str) -> String {
        let lower = month.to_lowercase();
        let full = match lower.as_str() {
            "jan" | "01" | "1" => "january",
            "feb" | "02" | "2" => "february",
            "mar" | "03" | "3" => "march",
            "apr" | "04" | "4" => "april",
            "05" | "5" => "may",
            "jun" | "06" | "6" => "june",
            "jul" | "07" | "7" => "july",
            "aug" | "08" | "8" => "august",
            "sep" | "sept" | "09" | "9" => "september",
            "oct" | "10" => "october",
            "nov" | "11" => "november",
            "dec" | "12" => "december",
            _ => return lower,
        };
        full.to_string()
    }

    fn weekday_name(weekday: &str) -> String {
        let lower = weekday.to_lowercase();
        let full = match lower.as_str() {
            "mon" => "monday",
            "tue" => "tuesday",
            "wed" => "wednesday",
            "thu" => "thursday",
            "fri" => "friday",
            "sat" => "saturday",
            "sun" => "sunday",
            _ => return lower,
        };
        full.to_string()
    }

    /// 纪元后缀："A.D." → "a d"
    fn era(caps: &Captures<'_>) -> Option<String> {
        let suffix = caps.name("bcsuffix")?.as_str().to_lowercase();
        let letters: Vec<String> = suffix
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .map(|c| c.to_string())
            .collect();
        Some(letters.join(" "))
    }
}
