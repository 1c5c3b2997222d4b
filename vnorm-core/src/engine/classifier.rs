//! 记号分类器
//!
//! 规则按优先级排列在 `CLASSIFIER_RULES` 表中，第一个命中的规则生效：
//!
//! 1. 网址（含 "//"、".com"、".html"）→ Electronic
//! 2. 含数字：
//!    - 前 / 后一个记号是月份 → 与月份拼接后按 Date 转换
//!    - 序数后缀 → Ordinal；":" → Time；货币符号开头 → Money；
//!      "/" → Fraction；"." → Decimal；"," 或长度 ≤ 3 → Cardinal；
//!      "-" → Range；其余 → Date
//! 3. "#" 且后一个记号含数字 → "number"
//! 4. 不含字母数字 → Punct
//! 5. 其余 → Plain

use crate::engine::token::{has_digit, SemioticClass, Token};

/// 月份名（小写）。"may" 只在首字母大写时算月份
const MONTHS: [&str; 22] = [
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december",
];

const ORDINAL_SUFFIXES: [&str; 4] = ["th", "nd", "st", "rd"];

const CURRENCY_GLYPHS: [char; 4] = ['$', '€', '£', '¥'];

/// 分类规则种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Electronic,
    /// 前一个记号是月份："Jan 5"
    MonthBefore,
    /// 后一个记号是月份："5 Jan"
    MonthAfter,
    Ordinal,
    Time,
    Money,
    Fraction,
    Decimal,
    Cardinal,
    Range,
    /// 其余含数字的记号按日期尝试
    DateFallback,
    /// "#" 后跟数字
    NumberSign,
    Punct,
    Plain,
}

impl RuleKind {
    /// 规则使用的转换类别
    pub fn class(&self) -> SemioticClass {
        match self {
            RuleKind::Electronic => SemioticClass::Electronic,
            RuleKind::MonthBefore | RuleKind::MonthAfter | RuleKind::DateFallback => {
                SemioticClass::Date
            }
            RuleKind::Ordinal => SemioticClass::Ordinal,
            RuleKind::Time => SemioticClass::Time,
            RuleKind::Money => SemioticClass::Money,
            RuleKind::Fraction => SemioticClass::Fraction,
            RuleKind::Decimal => SemioticClass::Decimal,
            RuleKind::Cardinal => SemioticClass::Cardinal,
            RuleKind::Range => SemioticClass::Range,
            RuleKind::NumberSign => SemioticClass::Verbatim,
            RuleKind::Punct => SemioticClass::Punct,
            RuleKind::Plain => SemioticClass::Plain,
        }
    }

    /// 含数字的规则：输出仍有数字时再走一次 Cardinal
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            RuleKind::Electronic | RuleKind::NumberSign | RuleKind::Punct | RuleKind::Plain
        )
    }
}

/// 一条分类规则
#[derive(Debug, Clone, Copy)]
pub struct ClassifierRule {
    pub kind: RuleKind,
    pub matches: fn(&Token) -> bool,
}

/// 分类规则表（按优先级）
pub const CLASSIFIER_RULES: [ClassifierRule; 14] = [
    ClassifierRule { kind: RuleKind::Electronic, matches: is_url },
    ClassifierRule { kind: RuleKind::MonthBefore, matches: month_before },
    ClassifierRule { kind: RuleKind::MonthAfter, matches: month_after },
    ClassifierRule { kind: RuleKind::Ordinal, matches: is_ordinal },
    ClassifierRule { kind: RuleKind::Time, matches: is_time },
    ClassifierRule { kind: RuleKind::Money, matches: is_money },
    ClassifierRule { kind: RuleKind::Fraction, matches: is_fraction },
    ClassifierRule { kind: RuleKind::Decimal, matches: is_decimal },
    ClassifierRule { kind: RuleKind::Cardinal, matches: is_cardinal },
    ClassifierRule { kind: RuleKind::Range, matches: is_range },
    ClassifierRule { kind: RuleKind::DateFallback, matches: Token::has_digit },
    ClassifierRule { kind: RuleKind::NumberSign, matches: is_number_sign },
    ClassifierRule { kind: RuleKind::Punct, matches: is_punct },
    ClassifierRule { kind: RuleKind::Plain, matches: any_token },
];

/// 分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub kind: RuleKind,
    pub class: SemioticClass,
}

/// 记号分类器
pub struct Classifier;

impl Classifier {
    /// 按规则表为记号选择转换路径
    pub fn classify(token: &Token) -> Route {
        let kind = CLASSIFIER_RULES
            .iter()
            .find(|rule| (rule.matches)(token))
            .map_or(RuleKind::Plain, |rule| rule.kind);

        tracing::debug!("分类: {:?} -> {:?}", token.text, kind);

        Route {
            kind,
            class: kind.class(),
        }
    }

    /// 是否为月份名（大小写不敏感，"may" 除外；"May" 算月份）
    pub fn is_month(text: &str) -> bool {
        let lower = text.to_lowercase();
        text == "May" || MONTHS.iter().any(|m| *m == lower)
    }
}

fn is_url(token: &Token) -> bool {
    let text = &token.text;
    text.contains("//") || text.contains(".com") || text.contains(".html")
}

fn month_before(token: &Token) -> bool {
    token.has_digit() && Classifier::is_month(&token.prev)
}

fn month_after(token: &Token) -> bool {
    token.has_digit() && Classifier::is_month(&token.next)
}

fn is_ordinal(token: &Token) -> bool {
    let lower = token.text.to_lowercase();
    token.has_digit() && ORDINAL_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

fn is_time(token: &Token) -> bool {
    token.has_digit() && token.text.contains(':')
}

fn is_money(token: &Token) -> bool {
    token.has_digit() && token.text.starts_with(&CURRENCY_GLYPHS[..])
}

fn is_fraction(token: &Token) -> bool {
    token.has_digit() && token.text.contains('/')
}

fn is_decimal(token: &Token) -> bool {
    token.has_digit() && token.text.contains('.')
}

fn is_cardinal(token: &Token) -> bool {
    token.has_digit() && (token.text.contains(',') || token.text.chars().count() <= 3)
}

fn is_range(token: &Token) -> bool {
    token.has_digit() && token.text.contains('-')
}

fn is_number_sign(token: &Token) -> bool {
    token.text == "#" && has_digit(&token.next)
}

fn is_punct(token: &Token) -> bool {
    !token.text.chars().any(char::is_alphanumeric)
}

fn any_token(_: &Token) -> bool {
    true
}
