//! 标点：原样返回

/// 标点转换器
pub struct PunctConverter;

impl PunctConverter {
    pub fn convert(text: &str) -> String {
        text.to_string()
    }
}
