//! 字母序列读法
//!
//! "NASA" → "n a s a"，"CDs" → "c d's"，"IBM's" → "i b m's"

use crate::classes::verbatim::VerbatimConverter;

/// 保留字母（含拉丁-1 重音字母）、"&" 和 "'"
fn is_kept(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(ch, 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ÿ' | '&' | '\'')
}

/// 字母序列转换器
pub struct LettersConverter;

impl LettersConverter {
    pub fn convert(text: &str) -> String {
        // 只取第一个词，"x. y" 形式除外
        let mut token = text;
        if token.contains(' ') && !token.contains(". ") {
            token = token.split(' ').next().unwrap_or("");
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return String::new(),
            (Some(ch), None) => return Self::accent_word(ch).unwrap_or_else(|| ch.to_string()),
            _ => {}
        }

        // 以 "-" 结尾时不加所有格
        let allow_suffix = !token.ends_with('-');

        let mut letters: Vec<char> = token.chars().filter(|c| is_kept(*c)).collect();

        let possessive = if allow_suffix
            && letters.len() >= 3
            && (letters.ends_with(&['\'', 's']) || letters.ends_with(&['s', '\'']))
        {
            letters.truncate(letters.len() - 2);
            true
        } else if allow_suffix
            && letters.last() == Some(&'s')
            && letters[..letters.len() - 1].iter().any(|c| c.is_uppercase())
        {
            letters.pop();
            true
        } else {
            false
        };

        let mut result = letters
            .iter()
            .filter(|c| **c != '\'')
            .map(|c| Self::accent_word(*c).unwrap_or_else(|| VerbatimConverter::convert_char(*c)))
            .collect::<Vec<_>>()
            .join(" ");

        if possessive {
            result.push_str("'s");
        }
        result
    }

    fn accent_word(ch: char) -> Option<String> {
        match ch {
            'é' => Some("e acute".to_string()),
            _ => None,
        }
    }
}
