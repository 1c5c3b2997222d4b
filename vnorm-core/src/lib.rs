//! V-Norm Core Engine
//!
//! 英文文本正则化核心引擎：把书写形式的记号（数字、日期、金额、度量、网址……）
//! 转换为可朗读的英文单词。

#![warn(rust_2018_idioms)]

pub mod classes;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod numeral;

// Re-export key types
pub use config::{NormalizeMode, VNormConfig};
pub use engine::{Converter, NormalizeResult, Normalizer, SemioticClass, Token, TokenChange};
pub use error::{VNormError, VNormResult};
pub use lexicon::Lexicon;

/// 初始化日志系统
///
/// 仅在 `debug-logs` 特性下生效。`VNORM_LOG` 使用 `EnvFilter` 语法控制输出级别，
/// 例如 `VNORM_LOG=debug` 打印每个记号的分类结果和基数词兜底，
/// `VNORM_LOG=vnorm_core::lexicon=info` 只看词表加载；未设置时为 `warn`，
/// 只报告被拒绝的词表文件。未启用特性时为空操作。
///
/// 可以安全地多次调用，重复初始化会被忽略。
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("VNORM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
