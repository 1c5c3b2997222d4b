//! 正则化引擎
//!
//! 记号 → 分类 → 转换器分派 → 记号流驱动

pub mod classifier;
pub mod converter;
pub mod normalizer;
pub mod token;

// 导出核心类型
pub use classifier::{Classifier, ClassifierRule, Route, RuleKind, CLASSIFIER_RULES};
pub use converter::Converter;
pub use normalizer::{NormalizeResult, Normalizer, TokenChange};
pub use token::{SemioticClass, Token};
