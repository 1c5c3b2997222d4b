//! 记号与语义类别

use std::fmt;
use std::str::FromStr;

use crate::error::VNormError;

/// 待转换的记号，带左右相邻记号作为上下文
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// 记号文本
    pub text: String,
    /// 前一个记号（没有时为空串）
    pub prev: String,
    /// 后一个记号（没有时为空串）
    pub next: String,
}

impl Token {
    /// 无上下文的记号
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// 带上下文的记号
    pub fn with_context(
        text: impl Into<String>,
        prev: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            prev: prev.into(),
            next: next.into(),
        }
    }

    /// 记号文本是否含 ASCII 数字
    pub fn has_digit(&self) -> bool {
        has_digit(&self.text)
    }
}

pub(crate) fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// 语义类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemioticClass {
    Plain,
    Punct,
    Date,
    Letters,
    Cardinal,
    Verbatim,
    Decimal,
    Measure,
    Money,
    Ordinal,
    Time,
    Electronic,
    Digit,
    Fraction,
    Telephone,
    Address,
    Roman,
    Range,
}

impl SemioticClass {
    /// 全部类别
    pub const ALL: [SemioticClass; 18] = [
        SemioticClass::Plain,
        SemioticClass::Punct,
        SemioticClass::Date,
        SemioticClass::Letters,
        SemioticClass::Cardinal,
        SemioticClass::Verbatim,
        SemioticClass::Decimal,
        SemioticClass::Measure,
        SemioticClass::Money,
        SemioticClass::Ordinal,
        SemioticClass::Time,
        SemioticClass::Electronic,
        SemioticClass::Digit,
        SemioticClass::Fraction,
        SemioticClass::Telephone,
        SemioticClass::Address,
        SemioticClass::Roman,
        SemioticClass::Range,
    ];

    /// 大写标签名（如 "CARDINAL"）
    pub fn as_str(&self) -> &'static str {
        match self {
            SemioticClass::Plain => "PLAIN",
            SemioticClass::Punct => "PUNCT",
            SemioticClass::Date => "DATE",
            SemioticClass::Letters => "LETTERS",
            SemioticClass::Cardinal => "CARDINAL",
            SemioticClass::Verbatim => "VERBATIM",
            SemioticClass::Decimal => "DECIMAL",
            SemioticClass::Measure => "MEASURE",
            SemioticClass::Money => "MONEY",
            SemioticClass::Ordinal => "ORDINAL",
            SemioticClass::Time => "TIME",
            SemioticClass::Electronic => "ELECTRONIC",
            SemioticClass::Digit => "DIGIT",
            SemioticClass::Fraction => "FRACTION",
            SemioticClass::Telephone => "TELEPHONE",
            SemioticClass::Address => "ADDRESS",
            SemioticClass::Roman => "ROMAN",
            SemioticClass::Range => "RANGE",
        }
    }
}

impl fmt::Display for SemioticClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemioticClass {
    type Err = VNormError;

    /// 标签名不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        SemioticClass::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == upper)
            .ok_or_else(|| VNormError::UnknownClass(s.to_string()))
    }
}
