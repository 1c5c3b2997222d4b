//! 转换器分派
//!
//! 每个语义类别对应一个变体，统一经 `Converter::convert` 调用。

use crate::classes::{
    AddressConverter, DateConverter, ElectronicConverter, LettersConverter, MeasureConverter,
    MoneyConverter, PlainConverter, PunctConverter, RangeConverter, TelephoneConverter,
    TimeConverter, VerbatimConverter,
};
use crate::engine::token::{SemioticClass, Token};
use crate::lexicon::Lexicon;
use crate::numeral::{
    CardinalConverter, DecimalConverter, DigitConverter, FractionConverter, OrdinalConverter,
    RomanConverter,
};

/// 按语义类别分派的转换器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Converter {
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

impl Converter {
    /// 类别对应的转换器
    pub fn for_class(class: SemioticClass) -> Self {
        match class {
            SemioticClass::Plain => Converter::Plain,
            SemioticClass::Punct => Converter::Punct,
            SemioticClass::Date => Converter::Date,
            SemioticClass::Letters => Converter::Letters,
            SemioticClass::Cardinal => Converter::Cardinal,
            SemioticClass::Verbatim => Converter::Verbatim,
            SemioticClass::Decimal => Converter::Decimal,
            SemioticClass::Measure => Converter::Measure,
            SemioticClass::Money => Converter::Money,
            SemioticClass::Ordinal => Converter::Ordinal,
            SemioticClass::Time => Converter::Time,
            SemioticClass::Electronic => Converter::Electronic,
            SemioticClass::Digit => Converter::Digit,
            SemioticClass::Fraction => Converter::Fraction,
            SemioticClass::Telephone => Converter::Telephone,
            SemioticClass::Address => Converter::Address,
            SemioticClass::Roman => Converter::Roman,
            SemioticClass::Range => Converter::Range,
        }
    }

    /// 转换器所属类别
    pub fn class(&self) -> SemioticClass {
        match self {
            Converter::Plain => SemioticClass::Plain,
            Converter::Punct => SemioticClass::Punct,
            Converter::Date => SemioticClass::Date,
            Converter::Letters => SemioticClass::Letters,
            Converter::Cardinal => SemioticClass::Cardinal,
            Converter::Verbatim => SemioticClass::Verbatim,
            Converter::Decimal => SemioticClass::Decimal,
            Converter::Measure => SemioticClass::Measure,
            Converter::Money => SemioticClass::Money,
            Converter::Ordinal => SemioticClass::Ordinal,
            Converter::Time => SemioticClass::Time,
            Converter::Electronic => SemioticClass::Electronic,
            Converter::Digit => SemioticClass::Digit,
            Converter::Fraction => SemioticClass::Fraction,
            Converter::Telephone => SemioticClass::Telephone,
            Converter::Address => SemioticClass::Address,
            Converter::Roman => SemioticClass::Roman,
            Converter::Range => SemioticClass::Range,
        }
    }

    /// 转换记号文本
    ///
    /// 只使用 `token.text`；上下文由分类器消费。
    pub fn convert(&self, token: &Token, lexicon: &Lexicon) -> String {
        let text = token.text.as_str();
        match self {
            Converter::Plain => PlainConverter::convert(text, lexicon),
            Converter::Punct => PunctConverter::convert(text),
            Converter::Date => DateConverter::convert(text),
            Converter::Letters => LettersConverter::convert(text),
            Converter::Cardinal => CardinalConverter::convert(text),
            Converter::Verbatim => VerbatimConverter::convert(text),
            Converter::Decimal => DecimalConverter::convert(text),
            Converter::Measure => MeasureConverter::convert(text),
            Converter::Money => MoneyConverter::convert(text, lexicon),
            Converter::Ordinal => OrdinalConverter::convert(text),
            Converter::Time => TimeConverter::convert(text),
            Converter::Electronic => ElectronicConverter::convert(text),
            Converter::Digit => DigitConverter::convert(text),
            Converter::Fraction => FractionConverter::convert(text),
            Converter::Telephone => TelephoneConverter::convert(text),
            Converter::Address => AddressConverter::convert(text),
            Converter::Roman => {
                // 罗马数字按基数读，其余原样
                if RomanConverter::check_if_roman(text) {
                    CardinalConverter::convert(text)
                } else {
                    text.to_string()
                }
            }
            Converter::Range => RangeConverter::convert(text),
        }
    }
}
