//! 网址 / 电子地址转换模块
//!
//! 逐字符读出网址。以 `http(s)://` 开头时 ".com" 读作 "dot com"，
//! 分隔符读作整词；否则分隔符也逐字母拼读（"s l a s h"）。
//! `#标签` 走单独的 hashtag 读法。

use crate::numeral::{CardinalConverter, DigitConverter};

/// 两张表共有的字符读法
fn spelled_symbol(ch: char) -> Option<&'static str> {
    let spoken = match ch {
        'é' => "e a c u t e",
        '(' => "o p e n i n g p a r e n t h e s i s",
        ')' => "c l o s i n g p a r e n t h e s i s",
        '_' => "u n d e r s c o r e",
        ',' => "c o m m a",
        '%' => "p e r c e n t",
        '~' => "t i l d e",
        '\'' => "s i n g l e q u o t e",
        '"' => "d o u b l e q u o t e",
        '0' => "o",
        '1' => "o n e",
        '2' => "t w o",
        '3' => "t h r e e",
        '4' => "f o u r",
        '5' => "f i v e",
        '6' => "s i x",
        '7' => "s e v e n",
        '8' => "e i g h t",
        '9' => "n i n e",
        _ => return None,
    };
    Some(spoken)
}

/// `http(s)://` 开头的网址
fn http_symbol(ch: char) -> Option<&'static str> {
    match ch {
        '/' => Some("slash"),
        ':' => Some("colon"),
        '.' => Some("dot"),
        '#' => Some("hash"),
        '-' => Some("dash"),
        ';' => Some("s e m i colon"),
        _ => spelled_symbol(ch),
    }
}

/// 其他电子地址
fn plain_symbol(ch: char) -> Option<&'static str> {
    match ch {
        '/' => Some("s l a s h"),
        ':' => Some("c o l o n"),
        '.' => Some("dot"),
        '#' => Some("h a s h"),
        '-' => Some("d a s h"),
        ';' => Some("s e m i c o l o n"),
        _ => spelled_symbol(ch),
    }
}

/// hashtag 和 `sensible_convert` 使用的读法
fn sensible_symbol(ch: char) -> Option<&'static str> {
    let spoken = match ch {
        '/' => "slash",
        ':' => "colon",
        '.' => "dot",
        '#' => "hash",
        '-' => "dash",
        'é' => "e acute",
        '(' => "opening parenthesis",
        ')' => "closing parenthesis",
        '_' => "underscore",
        ',' => "comma",
        '%' => "percent",
        '~' => "tilde",
        ';' => "semicolon",
        '\'' => "single quote",
        '"' => "double quote",
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        _ => return None,
    };
    Some(spoken)
}

/// 把一段读法拆成单个字母："twenty" → "t w e n t y"
fn spell_letters(text: &str) -> String {
    text.chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 电子地址转换器
pub struct ElectronicConverter;

impl ElectronicConverter {
    /// 将网址 / 邮箱 / 标签转换为逐字符读法
    pub fn convert(text: &str) -> String {
        let token = text.to_lowercase();

        if token == "::" {
            return token;
        }
        if token.starts_with('#') && token.chars().count() > 1 {
            return Self::convert_hash_tag(&token);
        }

        let http = token.starts_with("http://") || token.starts_with("https://");
        let chars: Vec<char> = token.chars().collect();
        let mut parts: Vec<String> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if http && chars[i..].starts_with(&['.', 'c', 'o', 'm']) {
                parts.push("dot com".to_string());
                i += 4;
                continue;
            }

            let run = chars[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            if run > 0 {
                let digits: String = chars[i..i + run].iter().collect();
                if run == 2 && chars[i] != '0' {
                    parts.push(spell_letters(&CardinalConverter::convert(&digits)));
                    i += run;
                    continue;
                }
                if digits != "0" {
                    parts.push(spell_letters(&DigitConverter::convert(&digits)));
                    i += run;
                    continue;
                }
            }

            let symbol = if http { http_symbol(chars[i]) } else { plain_symbol(chars[i]) };
            match symbol {
                Some(spoken) => parts.push(spoken.to_string()),
                None => parts.push(chars[i].to_string()),
            }
            i += 1;
        }

        parts.join(" ")
    }

    /// 更自然的读法：分隔符读整词，数字逐位读
    pub fn sensible_convert(text: &str) -> String {
        let token = text.to_lowercase();

        if token == "::" {
            return token;
        }
        if token.starts_with('#') && token.chars().count() > 1 {
            return Self::convert_hash_tag(&token);
        }

        let mut parts: Vec<String> = Vec::new();
        let mut rest = token.as_str();
        while let Some(ch) = rest.chars().next() {
            if let Some(after) = rest.strip_prefix(".com") {
                parts.push("dot com".to_string());
                rest = after;
                continue;
            }
            match sensible_symbol(ch) {
                Some(spoken) => parts.push(spoken.to_string()),
                None => parts.push(ch.to_string()),
            }
            rest = &rest[ch.len_utf8()..];
        }

        parts.join(" ")
    }

    /// "#BlackLivesMatter" → "hash tag blacklivesmatter"
    fn convert_hash_tag(token: &str) -> String {
        let mut out = String::from("hash tag ");
        for ch in token.chars().skip(1).flat_map(char::to_lowercase) {
            match sensible_symbol(ch) {
                Some(spoken) => {
                    if !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push_str(spoken);
                    out.push(' ');
                }
                None => out.push(ch),
            }
        }
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url() {
        assert_eq!(
            ElectronicConverter::convert("http://google.com"),
            "h t t p colon slash slash g o o g l e dot com"
        );
    }

    #[test]
    fn test_plain_address() {
        assert_eq!(
            ElectronicConverter::convert("www.a-b.org"),
            "w w w dot a d a s h b dot o r g"
        );
        assert_eq!(
            ElectronicConverter::convert("example.com/x"),
            "e x a m p l e dot c o m s l a s h x"
        );
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(ElectronicConverter::convert("a25"), "a t w e n t y f i v e");
        assert_eq!(ElectronicConverter::convert("a123"), "a o n e t w o t h r e e");
        assert_eq!(ElectronicConverter::convert("a05"), "a o f i v e");
        assert_eq!(ElectronicConverter::convert("a0b"), "a o b");
    }

    #[test]
    fn test_hash_tag() {
        assert_eq!(ElectronicConverter::convert("#Rust2021"), "hash tag rust two zero two one");
        assert_eq!(ElectronicConverter::convert("#tag"), "hash tag tag");
    }

    #[test]
    fn test_double_colon() {
        assert_eq!(ElectronicConverter::convert("::"), "::");
    }

    #[test]
    fn test_sensible_convert() {
        assert_eq!(
            ElectronicConverter::sensible_convert("my-site.com/a_b"),
            "m y dash s i t e dot com slash a underscore b"
        );
    }
}
