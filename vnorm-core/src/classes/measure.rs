//! 计量单位转换模块
//!
//! "5/km2" → "five per square kilometers"
//! "1/2 kg" → "one half of a kilogram"
//! "10 cm3" → "ten c c"
//!
//! 单位表 = SI 前缀 × 可加前缀单位 的笛卡尔积，再叠加基础单位和自定义单位。
//! 先区分大小写查找，失败后按小写查找；小写冲突时后插入的条目优先
//! （"B" 字节优先于 "b" 比特，"m" 毫优先于 "M" 兆）。

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::UnitName;
use crate::numeral::tables::SCALE_SUFFIXES;
use crate::numeral::{DecimalConverter, FractionConverter, FRACTION_GLYPHS};

/// SI 前缀
const SI_PREFIXES: &[(&str, &str)] = &[
    ("Y", "yotta"),
    ("Z", "zetta"),
    ("E", "exa"),
    ("P", "peta"),
    ("T", "tera"),
    ("G", "giga"),
    ("M", "mega"),
    ("k", "kilo"),
    ("h", "hecto"),
    ("da", "deca"),
    ("d", "deci"),
    ("c", "centi"),
    ("m", "milli"),
    ("μ", "micro"),
    ("µ", "micro"),
    ("n", "nano"),
    ("p", "pico"),
    ("f", "femto"),
    ("a", "atto"),
    ("z", "zepto"),
    ("y", "yocto"),
];

/// 可加前缀的基础单位：(符号, 单数, 复数)
const PREFIXABLE_UNITS: &[(&str, &str, &str)] = &[
    ("m", "meter", "meters"),
    ("b", "bit", "bits"),
    ("B", "byte", "bytes"),
    ("bps", "bit per second", "bits per second"),
    ("Bps", "byte per second", "bytes per second"),
    ("g", "gram", "grams"),
    ("gf", "gram force", "grams force"),
    ("W", "watt", "watts"),
    ("Wh", "watt hour", "watt hours"),
    ("Hz", "hertz", "hertz"),
    ("hz", "hertz", "hertz"),
    ("J", "joule", "joules"),
    ("L", "liter", "liters"),
    ("V", "volt", "volts"),
    ("f", "farad", "farads"),
    ("s", "second", "seconds"),
    ("A", "ampere", "amperes"),
    ("Ah", "amp hour", "amp hours"),
    ("Pa", "pascal", "pascals"),
    ("C", "coulomb", "coulombs"),
    ("Bq", "becquerel", "becquerels"),
    ("N", "newton", "newtons"),
    ("bar", "bar", "bars"),
    ("lm", "lumen", "lumens"),
    ("cal", "calorie", "calories"),
];

/// 不加前缀的单位，同时覆盖笛卡尔积中的同名条目（"mb" → megabyte）
const CUSTOM_UNITS: &[(&str, &str, &str)] = &[
    ("%", "percent", "percent"),
    ("pc", "percent", "percent"),
    ("ft", "foot", "feet"),
    ("mi", "mile", "miles"),
    ("mb", "megabyte", "megabytes"),
    ("ha", "hectare", "hectares"),
    ("\"", "inch", "inches"),
    ("in", "inch", "inches"),
    ("'", "foot", "feet"),
    ("rpm", "revolution per minute", "revolutions per minute"),
    ("hp", "horsepower", "horsepower"),
    ("cc", "c c", "c c"),
    ("oz", "ounce", "ounces"),
    ("mph", "mile per hour", "miles per hour"),
    ("lb", "pound", "pounds"),
    ("lbs", "pounds", "pounds"),
    ("kt", "knot", "knots"),
    ("dB", "decibel", "decibels"),
    ("AU", "astronomical unit", "astronomical units"),
    ("st", "stone", "stone"),
    ("yd", "yard", "yards"),
    ("yr", "year", "years"),
    ("yrs", "year", "years"),
    ("eV", "electron volt", "electron volts"),
    ("/", "per", "per"),
    ("sq", "square", "square"),
    ("2", "square", "square"),
    ("²", "square", "square"),
    ("3", "cubic", "cubic"),
    ("³", "cubic", "cubic"),
    ("h", "hour", "hours"),
    ("hr", "hour", "hours"),
    ("hrs", "hour", "hours"),
    ("ch", "chain", "chains"),
    ("KiB", "kibibyte", "kibibytes"),
    ("MiB", "mebibyte", "mebibytes"),
    ("GiB", "gibibyte", "gibibytes"),
    ("pH", "p h", "p h"),
    ("kph", "kilometer per hour", "kilometers per hour"),
    ("Da", "dalton", "daltons"),
    ("cwt", "hundredweight", "hundredweight"),
    ("Sv", "sievert", "sieverts"),
    ("C", "celcius", "celcius"),
    ("degrees", "degree", "degrees"),
    ("degree", "degree", "degrees"),
    ("atm", "atmosphere", "atmospheres"),
    ("min", "minute", "minutes"),
    ("cd", "candela", "candelas"),
    ("ly", "light year", "light years"),
    ("kts", "knot", "knots"),
    ("mol", "mole", "moles"),
    ("Nm", "newton meter", "newton meters"),
    ("Ω", "ohm", "ohms"),
    ("bbl", "barrel", "barrels"),
    ("gal", "gallon", "gallons"),
    ("cal", "cal", "cal"),
];

/// 拆分单位串的分隔符
const SEPARATORS: &[&str] = &["/", "per", "sq", "2", "²", "3", "³"];

/// 写在被修饰单位之前的分隔符（"km2" → "square kilometers"）
const LEADING_SEPARATORS: &[&str] = &["sq", "2", "²", "3", "³"];

static UNITS: Lazy<UnitTable> = Lazy::new(UnitTable::build);

static FRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:(?:-?[0-9]* )?-?[0-9]+ */ *-? *[0-9]+|-?[0-9]* *[{FRACTION_GLYPHS}])"
    ))
    .unwrap()
});

// 匹配时表示前面有整数部分，不需要 "of a"
static WHOLE_FRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:-?[0-9]+ -?[0-9]+ */ *-? *[0-9]+|-?[0-9]+ *[{FRACTION_GLYPHS}])"
    ))
    .unwrap()
});

static VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^-?(?: |[0-9])*\.?[0-9]+ *(?:{})?",
        SCALE_SUFFIXES.join("|")
    ))
    .unwrap()
});

static CUBIC_CENTIMETER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cubic centimeters?").unwrap());

/// 单位查找表
struct UnitTable {
    exact: HashMap<String, UnitName>,
    lower: HashMap<String, UnitName>,
}

impl UnitTable {
    fn build() -> Self {
        // 保持插入顺序：覆盖已有键时位置不变
        let mut order: Vec<(String, UnitName)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut upsert = |key: String, name: UnitName| match index.get(&key) {
            Some(&i) => order[i].1 = name,
            None => {
                index.insert(key.clone(), order.len());
                order.push((key, name));
            }
        };

        for (symbol, singular, plural) in PREFIXABLE_UNITS {
            for (prefix, prefix_word) in SI_PREFIXES {
                upsert(
                    format!("{}{}", prefix, symbol),
                    UnitName::new(
                        &format!("{}{}", prefix_word, singular),
                        &format!("{}{}", prefix_word, plural),
                    ),
                );
            }
        }
        for (symbol, singular, plural) in PREFIXABLE_UNITS.iter().chain(CUSTOM_UNITS) {
            upsert(symbol.to_string(), UnitName::new(singular, plural));
        }

        let mut exact = HashMap::new();
        let mut lower = HashMap::new();
        for (key, name) in order {
            lower.insert(key.to_lowercase(), name.clone());
            exact.insert(key, name);
        }

        Self { exact, lower }
    }

    fn lookup(&self, piece: &str) -> Option<&UnitName> {
        self.exact
            .get(piece)
            .or_else(|| self.lower.get(&piece.to_lowercase()))
    }
}

/// 计量单位转换器
pub struct MeasureConverter;

impl MeasureConverter {
    /// 将 "数值 + 单位" 转换为英文读法
    pub fn convert(text: &str) -> String {
        let mut token = text.replace(',', "");
        let mut parts: Vec<String> = Vec::new();
        let mut plural = false;

        if let Some(m) = FRACTION_RE.find(&token) {
            let fraction = m.as_str().to_string();
            parts.push(FractionConverter::convert(&fraction));
            token = token[m.end()..].replace(' ', "");

            if WHOLE_FRACTION_RE.is_match(&fraction) {
                plural = true;
            } else if token.starts_with(['a', 'e', 'i', 'o', 'u']) {
                parts.push("of an".to_string());
            } else {
                parts.push("of a".to_string());
            }
        } else if let Some(m) = VALUE_RE.find(&token) {
            let value = m.as_str().to_string();
            parts.push(DecimalConverter::convert(&value.replace(' ', "")));
            token = token[m.end()..].to_string();

            let numeric: String = value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
                .collect();
            plural = match numeric.parse::<f64>() {
                Ok(v) => v.abs() != 1.0 || value.contains('.'),
                Err(_) => true,
            };
        }

        // "per" 之后的单位用单数，但 "square"/"cubic" 不打断这一状态
        let mut per = false;
        for word in token.split(' ') {
            for (i, piece) in Self::split_units(word).into_iter().enumerate() {
                let spoken = match UNITS.lookup(piece) {
                    Some(name) => name.pick(!(plural && !per)).to_string(),
                    None => piece.to_string(),
                };

                if spoken == "per" && i != 0 {
                    per = true;
                } else if spoken != "square" && spoken != "cubic" {
                    per = false;
                }
                parts.push(spoken);
            }
        }

        let result = parts.join(" ");
        CUBIC_CENTIMETER_RE.replace_all(&result, "c c").into_owned()
    }

    /// 在分隔符处拆分单位串
    ///
    /// "/" 和 "per" 位于其后单位之前；"sq"、"2"、"³" 等移到被修饰单位之前。
    fn split_units(word: &str) -> Vec<&str> {
        let mut pieces = Vec::new();
        let mut rest = word;

        while let Some((start, separator)) = Self::find_separator(rest) {
            let head = &rest[..start];
            let end = start + separator.len();

            if LEADING_SEPARATORS.contains(&separator) {
                pieces.push(&rest[start..end]);
                if !head.is_empty() {
                    pieces.push(head);
                }
            } else {
                if !head.is_empty() {
                    pieces.push(head);
                }
                pieces.push(&rest[start..end]);
            }

            rest = &rest[end..];
        }

        if !rest.is_empty() {
            pieces.push(rest);
        }
        pieces
    }

    /// 找到最靠前的分隔符（"per" 后紧跟 "cent" 时不算）
    fn find_separator(text: &str) -> Option<(usize, &'static str)> {
        text.char_indices().find_map(|(i, _)| {
            let tail = &text[i..];
            SEPARATORS
                .iter()
                .find(|sep| {
                    tail.starts_with(*sep)
                        && !(**sep == "per" && tail[3..].starts_with("cent"))
                })
                .map(|sep| (i, *sep))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_units() {
        assert_eq!(MeasureConverter::convert("5 km"), "five kilometers");
        assert_eq!(MeasureConverter::convert("1 kg"), "one kilogram");
        assert_eq!(MeasureConverter::convert("1.0 kg"), "one point zero kilograms");
        assert_eq!(MeasureConverter::convert("30%"), "thirty percent");
    }

    #[test]
    fn test_per_keeps_singular() {
        assert_eq!(MeasureConverter::convert("60 km/h"), "sixty kilometers per hour");
        assert_eq!(
            MeasureConverter::convert("5/km2"),
            "five per square kilometers"
        );
        assert_eq!(
            MeasureConverter::convert("3 kg/m2"),
            "three kilograms per square meter"
        );
    }

    #[test]
    fn test_percent_is_not_per() {
        assert_eq!(MeasureConverter::convert("12 percent"), "twelve percent");
    }

    #[test]
    fn test_cubic_centimeters() {
        assert_eq!(MeasureConverter::convert("10 cm3"), "ten c c");
        assert_eq!(MeasureConverter::convert("1 cm³"), "one c c");
    }

    #[test]
    fn test_fraction_values() {
        assert_eq!(MeasureConverter::convert("1/2 kg"), "one half of a kilogram");
        assert_eq!(MeasureConverter::convert("½ inch"), "one half of an inch");
        assert_eq!(MeasureConverter::convert("2 1/2 kg"), "two and a half kilograms");
    }

    #[test]
    fn test_case_insensitive_fallback() {
        // "KB" 不在区分大小写的表中，小写 "kb" 取最后插入的 "kB"
        assert_eq!(MeasureConverter::convert("2 KB"), "two kilobytes");
        assert_eq!(MeasureConverter::convert("4 MB"), "four megabytes");
    }

    #[test]
    fn test_scale_value() {
        assert_eq!(
            MeasureConverter::convert("30 million km"),
            "thirty million kilometers"
        );
    }

    #[test]
    fn test_unknown_unit_kept() {
        assert_eq!(MeasureConverter::convert("3 zorks"), "three zorks");
    }

    #[test]
    fn test_split_units() {
        assert_eq!(MeasureConverter::split_units("/km2"), vec!["/", "2", "km"]);
        assert_eq!(MeasureConverter::split_units("m/s"), vec!["m", "/", "s"]);
        assert_eq!(MeasureConverter::split_units("percent"), vec!["percent"]);
    }
}
