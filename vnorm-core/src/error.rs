use thiserror::Error;

/// V-Norm 错误类型
///
/// 转换器本身从不返回错误（无法识别的记号原样透传），
/// 只有配置和词表加载会失败。
#[derive(Error, Debug)]
pub enum VNormError {
    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Config directory unavailable")]
    ConfigDirUnavailable,

    // 词表错误
    #[error("Lexicon parse error: {source_name} - {reason}")]
    LexiconParse { source_name: String, reason: String },

    // 类别错误
    #[error("Unknown semiotic class: {0}")]
    UnknownClass(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VNormResult<T> = Result<T, VNormError>;
