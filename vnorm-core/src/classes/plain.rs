//! 普通词转换
//!
//! 查词典（英式 → 美式拼写、常见缩写），否则去掉标点原样返回。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

/// 需要拆出的复合词尾
const SPLIT_SUFFIXES: [&str; 2] = ["strasse", "weg"];

static SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(.*)({})$", SPLIT_SUFFIXES.join("|"))).unwrap()
});

fn is_kept(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ÿ' | '\'')
}

/// 普通词转换器
pub struct PlainConverter;

impl PlainConverter {
    /// # 示例
    /// ```
    /// # use vnorm_core::classes::PlainConverter;
    /// # use vnorm_core::lexicon::Lexicon;
    /// let lexicon = Lexicon::shared();
    /// assert_eq!(PlainConverter::convert("colour", &lexicon), "color");
    /// assert_eq!(PlainConverter::convert("Hauptstrasse", &lexicon), "haupt strasse");
    /// ```
    pub fn convert(text: &str, lexicon: &Lexicon) -> String {
        // 大小写敏感的街道缩写
        match text {
            "DR" => return "drive".to_string(),
            "ST" => return "street".to_string(),
            _ => {}
        }

        if let Some(word) = lexicon.plain_word(&text.to_lowercase()) {
            return word.to_string();
        }

        let token: String = text.chars().filter(|c| is_kept(*c)).collect();

        let lower = token.to_lowercase();
        if SPLIT_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            if let Some(caps) = SPLIT_RE.captures(&token) {
                if !caps[1].is_empty() {
                    return format!("{} {}", &caps[1], &caps[2]).to_lowercase();
                }
            }
        }

        token
    }
}
