//! 语义类别转换器
//!
//! 每个语义类别一个转换器，接口统一为 `convert(text) -> String`。
//! 依赖词表的转换器（Money、Plain）额外接收 `&Lexicon`。
//! 转换器从不返回错误，无法识别的输入原样（或清理后）返回。

pub mod address;
pub mod date;
pub mod electronic;
pub mod letters;
pub mod measure;
pub mod money;
pub mod plain;
pub mod punct;
pub mod range;
pub mod telephone;
pub mod time;
pub mod verbatim;

// 导出转换器
pub use address::AddressConverter;
pub use date::DateConverter;
pub use electronic::ElectronicConverter;
pub use letters::LettersConverter;
pub use measure::MeasureConverter;
pub use money::MoneyConverter;
pub use plain::PlainConverter;
pub use punct::PunctConverter;
pub use range::RangeConverter;
pub use telephone::TelephoneConverter;
pub use time::TimeConverter;
pub use verbatim::VerbatimConverter;
