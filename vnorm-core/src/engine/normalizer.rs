//! Normalizer - 主管道
//!
//! 分类 → 转换 → 残留数字兜底 → 去掉 "$"

use std::sync::Arc;

use crate::classes::DateConverter;
use crate::config::{NormalizeMode, VNormConfig};
use crate::engine::classifier::{Classifier, RuleKind};
use crate::engine::converter::Converter;
use crate::engine::token::{has_digit, SemioticClass, Token};
use crate::error::VNormResult;
use crate::lexicon::Lexicon;
use crate::numeral::CardinalConverter;

/// 记号变更记录（用于回滚）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenChange {
    /// 记号下标
    pub index: usize,
    /// 原始文本
    pub original: String,
    /// 规范化后的文本
    pub normalized: String,
}

/// 记号流处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeResult {
    /// 规范化后的记号
    pub tokens: Vec<String>,
    /// 变更记录列表
    pub changes: Vec<TokenChange>,
}

impl NormalizeResult {
    /// 以空格连接的文本
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// 文本正则化器
pub struct Normalizer {
    config: VNormConfig,
    lexicon: Arc<Lexicon>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_lexicon(VNormConfig::default(), Lexicon::shared())
    }
}

impl Normalizer {
    /// 按配置创建
    ///
    /// 配置中指定了附加词表时会读取对应文件，否则共享内置词表。
    pub fn new(config: VNormConfig) -> VNormResult<Self> {
        let lexicon = if config.currency_file.is_none() && config.plain_file.is_none() {
            Lexicon::shared()
        } else {
            Arc::new(Lexicon::from_config(&config)?)
        };

        tracing::info!(
            "Normalizer 初始化: 模式 {:?}, {} 种货币, {} 个替换词",
            config.mode,
            lexicon.currency_count(),
            lexicon.plain_count()
        );

        Ok(Self { config, lexicon })
    }

    /// 使用已有词表创建
    pub fn with_lexicon(config: VNormConfig, lexicon: Arc<Lexicon>) -> Self {
        Self { config, lexicon }
    }

    /// 规范化单个记号
    ///
    /// # 参数
    /// - `text`: 记号文本
    /// - `prev` / `next`: 相邻记号，没有时传空串
    ///
    /// # 示例
    /// ```
    /// # use vnorm_core::Normalizer;
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.normalize_token("$1.56", "", ""), "one dollar and fifty six cents");
    /// assert_eq!(normalizer.normalize_token("23", "Jan", ""), "twenty third");
    /// ```
    pub fn normalize_token(&self, text: &str, prev: &str, next: &str) -> String {
        match self.config.mode {
            NormalizeMode::Raw => return text.to_string(),
            NormalizeMode::NumbersOnly if !has_digit(text) => return text.to_string(),
            _ => {}
        }

        let token = Token::with_context(text, prev, next);
        self.classify_and_convert(&token).replace('$', "")
    }

    /// 按指定类别直接转换
    pub fn convert_as(&self, class: SemioticClass, text: &str) -> String {
        Converter::for_class(class).convert(&Token::new(text), &self.lexicon)
    }

    /// 处理记号流，每个记号以相邻记号为上下文
    pub fn process_tokens(&self, tokens: &[&str]) -> NormalizeResult {
        let mut normalized = Vec::with_capacity(tokens.len());
        let mut changes = Vec::new();

        for (index, text) in tokens.iter().enumerate() {
            let prev = if index > 0 { tokens[index - 1] } else { "" };
            let next = tokens.get(index + 1).copied().unwrap_or("");

            let output = self.normalize_token(text, prev, next);

            // 记录变更
            if output != *text {
                changes.push(TokenChange {
                    index,
                    original: text.to_string(),
                    normalized: output.clone(),
                });
            }

            normalized.push(output);
        }

        NormalizeResult {
            tokens: normalized,
            changes,
        }
    }

    /// 回滚处理结果，恢复原始记号
    pub fn rollback(result: &NormalizeResult) -> Vec<String> {
        let mut tokens = result.tokens.clone();

        for change in result.changes.iter().rev() {
            if let Some(slot) = tokens.get_mut(change.index) {
                *slot = change.original.clone();
            }
        }

        tokens
    }

    /// 设置模式
    pub fn set_mode(&mut self, mode: NormalizeMode) {
        self.config.mode = mode;
    }

    /// 获取当前模式
    pub fn mode(&self) -> NormalizeMode {
        self.config.mode
    }

    pub fn config(&self) -> &VNormConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn classify_and_convert(&self, token: &Token) -> String {
        let route = Classifier::classify(token);

        if self.config.mode == NormalizeMode::NumbersOnly
            && matches!(route.kind, RuleKind::NumberSign | RuleKind::Plain)
        {
            return token.text.clone();
        }

        let output = match route.kind {
            RuleKind::Electronic => {
                let spoken = Converter::Electronic.convert(token, &self.lexicon);
                if self.config.upper_case_electronic {
                    spoken.to_uppercase()
                } else {
                    spoken
                }
            }
            RuleKind::MonthBefore => {
                let month = DateConverter::month_name(&token.prev);
                Self::strip_month(&DateConverter::convert(&format!("{} {}", month, token.text)), &month)
            }
            RuleKind::MonthAfter => {
                let month = DateConverter::month_name(&token.next);
                Self::strip_month(&DateConverter::convert(&format!("{} {}", token.text, month)), &month)
            }
            kind => Converter::for_class(kind.class()).convert(token, &self.lexicon),
        };

        // 兜底：输出仍有数字时按基数词再读一次（只做一次）
        if route.kind.is_numeric() && has_digit(&output) {
            tracing::debug!("残留数字，按基数词兜底: {:?} -> {:?}", token.text, output);
            return CardinalConverter::convert(&output);
        }

        output
    }

    /// 去掉拼接进来的月份词
    fn strip_month(converted: &str, month: &str) -> String {
        converted.replace(month, "").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_no_conversion() {
        let mut normalizer = Normalizer::default();
        normalizer.set_mode(NormalizeMode::Raw);
        assert_eq!(normalizer.mode(), NormalizeMode::Raw);
        assert_eq!(normalizer.normalize_token("$5", "", ""), "$5");
    }

    #[test]
    fn test_numeric_tokens() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_token("21st", "", ""), "twenty first");
        assert_eq!(normalizer.normalize_token("12:10", "", ""), "twelve ten");
        assert_eq!(normalizer.normalize_token("3.14", "", ""), "three point one four");
        assert_eq!(normalizer.normalize_token("1,000", "", ""), "one thousand");
        assert_eq!(normalizer.normalize_token("10-20", "", ""), "ten to twenty");
        assert_eq!(normalizer.normalize_token("1990", "", ""), "nineteen ninety");
    }

    #[test]
    fn test_month_merge() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_token("23", "Jan", ""), "twenty third");
        assert_eq!(normalizer.normalize_token("23", "", "Jan"), "the twenty third of");
    }

    #[test]
    fn test_electronic_case() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_token("a.com", "", ""), "A DOT C O M");

        let config = VNormConfig {
            upper_case_electronic: false,
            ..VNormConfig::default()
        };
        let normalizer = Normalizer::with_lexicon(config, Lexicon::shared());
        assert_eq!(normalizer.normalize_token("a.com", "", ""), "a dot c o m");
    }

    #[test]
    fn test_number_sign() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_token("#", "", "5"), "number");
        assert_eq!(normalizer.normalize_token("#", "", "x"), "#");
    }

    #[test]
    fn test_numbers_only_mode() {
        let mut normalizer = Normalizer::default();
        normalizer.set_mode(NormalizeMode::NumbersOnly);
        assert_eq!(normalizer.normalize_token("colour", "", ""), "colour");
        assert_eq!(normalizer.normalize_token("#", "", "5"), "#");
        assert_eq!(normalizer.normalize_token("42", "", ""), "forty two");
    }

    #[test]
    fn test_process_tokens_and_rollback() {
        let normalizer = Normalizer::default();
        let tokens = ["hello", "(", "23", "Jan", "2020", ",", "12:10", "AM", ")"];
        let result = normalizer.process_tokens(&tokens);

        assert_eq!(result.tokens[0], "hello");
        assert_eq!(result.tokens[2], "the twenty third of");
        assert_eq!(result.tokens[4], "twenty twenty");
        assert_eq!(result.tokens[6], "twelve ten");
        assert!(result.changes.iter().all(|c| c.original != c.normalized));

        let restored = Normalizer::rollback(&result);
        assert_eq!(restored, tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_convert_as() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.convert_as(SemioticClass::Telephone, "1-800"), "one sil eight hundred");
        assert_eq!(normalizer.convert_as(SemioticClass::Letters, "NASA"), "n a s a");
    }
}
