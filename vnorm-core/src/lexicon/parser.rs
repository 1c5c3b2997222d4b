//! 词表文件解析器
//!
//! 解析货币表（TOML）和普通词替换表（TOML / txt）

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VNormError, VNormResult};

/// 单复数读法
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitName {
    pub singular: String,
    pub plural: String,
}

impl UnitName {
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }

    /// 按单复数取读法
    pub fn pick(&self, singular: bool) -> &str {
        if singular {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// 货币条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// 主币读法
    pub number: UnitName,
    /// 辅币读法（None 表示不支持 "x dollars and y cents" 读法）
    pub decimal: Option<UnitName>,
}

impl Currency {
    pub fn has_decimal_support(&self) -> bool {
        self.decimal.is_some()
    }
}

/// 文件中的两种写法
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrencyEntry {
    Split {
        number: UnitName,
        decimal: Option<UnitName>,
    },
    Flat(UnitName),
}

impl From<CurrencyEntry> for Currency {
    fn from(entry: CurrencyEntry) -> Self {
        match entry {
            CurrencyEntry::Split { number, decimal } => Currency { number, decimal },
            CurrencyEntry::Flat(number) => Currency {
                number,
                decimal: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrencyFile {
    #[serde(default)]
    currencies: HashMap<String, CurrencyEntry>,
}

/// 词表文件解析器
pub struct LexiconParser;

impl LexiconParser {
    /// 从 TOML 解析货币表
    ///
    /// 格式：
    /// ```toml
    /// [currencies]
    /// "$" = { number = { singular = "dollar", plural = "dollars" }, decimal = { singular = "cent", plural = "cents" } }
    /// "yen" = { singular = "yen", plural = "yen" }
    /// ```
    ///
    /// 键统一转为小写。
    pub fn parse_currencies(source_name: &str, content: &str) -> VNormResult<HashMap<String, Currency>> {
        let file: CurrencyFile = toml::from_str(content).map_err(|e| VNormError::LexiconParse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(file
            .currencies
            .into_iter()
            .map(|(key, entry)| (key.to_lowercase(), Currency::from(entry)))
            .collect())
    }

    /// 从 TOML 解析普通词替换表
    ///
    /// 格式：
    /// ```toml
    /// [words]
    /// colour = "color"
    /// jan = "january"
    /// ```
    pub fn parse_plain_toml(source_name: &str, content: &str) -> VNormResult<HashMap<String, String>> {
        use toml::Value;

        let value: Value = content.parse().map_err(|e: toml::de::Error| VNormError::LexiconParse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

        let words = match value.get("words").and_then(|w| w.as_table()) {
            Some(table) => table,
            None => return Ok(HashMap::new()),
        };

        let mut result = HashMap::new();
        for (written, spoken) in words {
            let spoken = spoken.as_str().ok_or_else(|| VNormError::LexiconParse {
                source_name: source_name.to_string(),
                reason: format!("Value for '{}' is not a string", written),
            })?;
            result.insert(written.to_lowercase(), spoken.to_string());
        }

        Ok(result)
    }

    /// 从文本解析普通词替换表
    ///
    /// 格式：
    /// ```text
    /// # 注释
    /// colour color
    /// e.g. for example
    /// ```
    pub fn parse_plain_txt(source_name: &str, content: &str) -> VNormResult<HashMap<String, String>> {
        let mut result = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // 跳过空行和注释
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (written, spoken) = line.split_once(char::is_whitespace).ok_or_else(|| {
                VNormError::LexiconParse {
                    source_name: source_name.to_string(),
                    reason: format!("Missing spoken form at line {}: '{}'", line_num + 1, line),
                }
            })?;

            result.insert(written.to_lowercase(), spoken.trim().to_string());
        }

        Ok(result)
    }

    /// 加载货币表文件
    pub fn load_currency_file(path: &Path) -> VNormResult<HashMap<String, Currency>> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_currencies(&path.display().to_string(), &content)
    }

    /// 加载普通词替换表文件（按扩展名检测格式）
    pub fn load_plain_file(path: &Path) -> VNormResult<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)?;
        let source_name = path.display().to_string();

        if let Some(ext) = path.extension() {
            if ext == "toml" {
                return Self::parse_plain_toml(&source_name, &content);
            }
        }

        // 默认使用 txt 格式
        Self::parse_plain_txt(&source_name, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currencies_both_forms() {
        let content = r#"
[currencies]
"$" = { number = { singular = "dollar", plural = "dollars" }, decimal = { singular = "cent", plural = "cents" } }
"YEN" = { singular = "yen", plural = "yen" }
        "#;

        let table = LexiconParser::parse_currencies("test", content).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table["$"].has_decimal_support());
        assert_eq!(table["$"].number.singular, "dollar");
        assert!(!table["yen"].has_decimal_support());
        assert_eq!(table["yen"].number.plural, "yen");
    }

    #[test]
    fn test_parse_currencies_invalid() {
        let content = r#"
[currencies]
"$" = { singular = "dollar" }
        "#;
        let err = LexiconParser::parse_currencies("bad.toml", content).unwrap_err();
        assert!(matches!(err, VNormError::LexiconParse { .. }));
    }

    #[test]
    fn test_parse_plain_toml() {
        let content = r#"
[words]
Colour = "color"
jan = "january"
        "#;

        let words = LexiconParser::parse_plain_toml("test", content).unwrap();
        assert_eq!(words.get("colour"), Some(&"color".to_string()));
        assert_eq!(words.get("jan"), Some(&"january".to_string()));
    }

    #[test]
    fn test_parse_plain_toml_non_string_value() {
        let content = "[words]\ncolour = 3\n";
        assert!(LexiconParser::parse_plain_toml("test", content).is_err());
    }

    #[test]
    fn test_parse_plain_txt() {
        let content = r#"
# 注释
colour color
e.g.   for example

        "#;

        let words = LexiconParser::parse_plain_txt("test", content).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.get("e.g."), Some(&"for example".to_string()));
    }

    #[test]
    fn test_parse_plain_txt_missing_value() {
        assert!(LexiconParser::parse_plain_txt("test", "colour").is_err());
    }

    #[test]
    fn test_unit_name_pick() {
        let name = UnitName::new("cent", "cents");
        assert_eq!(name.pick(true), "cent");
        assert_eq!(name.pick(false), "cents");
    }
}
