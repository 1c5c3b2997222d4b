//! 词表模块
//!
//! 货币表和普通词替换表。内置数据在编译期嵌入，
//! 可以通过配置文件追加或覆盖条目。构建完成后只读，经 `Arc` 共享。

pub mod parser;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::VNormConfig;
use crate::error::VNormResult;

pub use parser::{Currency, LexiconParser, UnitName};

const BUILTIN_CURRENCIES: &str = include_str!("../../data/currencies.toml");
const BUILTIN_PLAIN: &str = include_str!("../../data/plain.toml");

static DEFAULT_LEXICON: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::builtin()));

/// 只读词表
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    currencies: HashMap<String, Currency>,
    /// 按键长降序排列，用于前缀匹配
    currency_keys: Vec<String>,
    plain: HashMap<String, String>,
}

impl Lexicon {
    /// 从货币表和替换表构建
    pub fn new(currencies: HashMap<String, Currency>, plain: HashMap<String, String>) -> Self {
        let mut currency_keys: Vec<String> = currencies.keys().cloned().collect();
        currency_keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

        Self {
            currencies,
            currency_keys,
            plain,
        }
    }

    /// 解析内置数据
    pub fn try_builtin() -> VNormResult<Self> {
        let currencies = LexiconParser::parse_currencies("builtin:currencies.toml", BUILTIN_CURRENCIES)?;
        let plain = LexiconParser::parse_plain_toml("builtin:plain.toml", BUILTIN_PLAIN)?;

        tracing::info!(
            "内置词表加载完成: {} 种货币, {} 个替换词",
            currencies.len(),
            plain.len()
        );

        Ok(Self::new(currencies, plain))
    }

    /// 解析内置数据，失败时退化为空表
    pub fn builtin() -> Self {
        match Self::try_builtin() {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!("内置词表解析失败，使用空表: {}", e);
                Self::default()
            }
        }
    }

    /// 进程内共享的默认词表
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// 按配置构建：内置数据 + 配置中指定的附加文件
    ///
    /// 附加文件中的条目覆盖内置条目。
    pub fn from_config(config: &VNormConfig) -> VNormResult<Self> {
        let mut currencies = LexiconParser::parse_currencies("builtin:currencies.toml", BUILTIN_CURRENCIES)?;
        let mut plain = LexiconParser::parse_plain_toml("builtin:plain.toml", BUILTIN_PLAIN)?;

        if let Some(path) = &config.currency_file {
            let extra = LexiconParser::load_currency_file(path)?;
            tracing::info!("加载货币表: {:?} ({} 条)", path, extra.len());
            currencies.extend(extra);
        }

        if let Some(path) = &config.plain_file {
            let extra = LexiconParser::load_plain_file(path)?;
            tracing::info!("加载替换词表: {:?} ({} 条)", path, extra.len());
            plain.extend(extra);
        }

        Ok(Self::new(currencies, plain))
    }

    /// 精确查找货币（键为小写）
    pub fn currency(&self, key: &str) -> Option<&Currency> {
        self.currencies.get(key)
    }

    /// 查找 `text` 开头最长的货币键（至少两个字符）
    ///
    /// # 返回
    /// - `(货币, 剩余文本)`
    pub fn currency_prefix<'a>(&self, text: &'a str) -> Option<(&Currency, &'a str)> {
        self.currency_keys
            .iter()
            .filter(|key| key.chars().count() >= 2)
            .find_map(|key| {
                let rest = text.strip_prefix(key.as_str())?;
                Some((&self.currencies[key], rest))
            })
    }

    /// 普通词替换（键为小写）
    pub fn plain_word(&self, key: &str) -> Option<&str> {
        self.plain.get(key).map(String::as_str)
    }

    pub fn currency_count(&self) -> usize {
        self.currencies.len()
    }

    pub fn plain_count(&self) -> usize {
        self.plain.len()
    }
}
