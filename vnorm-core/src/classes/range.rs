//! 数值区间："10-20" → "ten to twenty"

use crate::numeral::CardinalConverter;

/// 区间转换器
pub struct RangeConverter;

impl RangeConverter {
    /// 按 "-" 切分，两段读作 "A to B"，多段依次读出
    pub fn convert(text: &str) -> String {
        let parts: Vec<&str> = text.split('-').collect();

        match parts.as_slice() {
            [single] => CardinalConverter::convert(single),
            [from, to] => format!(
                "{} to {}",
                CardinalConverter::convert(from),
                CardinalConverter::convert(to)
            ),
            _ => parts
                .iter()
                .map(|p| CardinalConverter::convert(p))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
