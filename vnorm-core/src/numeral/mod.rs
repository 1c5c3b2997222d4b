//! 数词子系统
//!
//! 逐位读数、基数、罗马数字、序数、小数和分数。
//! 其余语义类别的转换器都建立在这些基础转换器之上。

pub mod cardinal;
pub mod decimal;
pub mod digit;
pub mod fraction;
pub mod ordinal;
pub mod roman;
pub mod tables;

pub use cardinal::CardinalConverter;
pub use decimal::DecimalConverter;
pub use digit::DigitConverter;
pub use fraction::{FractionConverter, FRACTION_GLYPHS};
pub use ordinal::OrdinalConverter;
pub use roman::RomanConverter;
