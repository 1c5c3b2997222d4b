//! 转换器集成测试
//!
//! 覆盖各转换器的公开接口和关键性质

use proptest::prelude::*;

use vnorm_core::classes::{
    DateConverter, MeasureConverter, MoneyConverter, PlainConverter, PunctConverter,
};
use vnorm_core::numeral::tables::SCALE_SUFFIXES;
use vnorm_core::numeral::{CardinalConverter, DigitConverter, FractionConverter, RomanConverter};
use vnorm_core::Lexicon;

#[test]
fn test_digit_special_case() {
    assert_eq!(DigitConverter::convert("007"), "double o seven");
    assert_eq!(DigitConverter::convert("008"), "o o eight");
}

#[test]
fn test_roman_decode() {
    assert_eq!(RomanConverter::convert("XIV"), ("14".to_string(), String::new()));
    assert_eq!(RomanConverter::convert("IIs"), ("2".to_string(), "'s".to_string()));
}

#[test]
fn test_roman_decode_well_formed_numerals() {
    const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
    const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
    const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
    const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];

    for n in 1..=3999usize {
        let numeral = format!(
            "{}{}{}{}",
            THOUSANDS[n / 1000],
            HUNDREDS[n / 100 % 10],
            TENS[n / 10 % 10],
            ONES[n % 10]
        );
        assert!(RomanConverter::check_if_roman(&numeral), "{}", numeral);
        assert_eq!(RomanConverter::convert(&numeral).0, n.to_string(), "{}", numeral);
    }
}

#[test]
fn test_cardinal_chunks_and_scales() {
    assert_eq!(CardinalConverter::convert("0"), "zero");
    assert_eq!(CardinalConverter::convert("1000001"), "one million one");
    assert_eq!(CardinalConverter::convert("--5"), "five");
    assert_eq!(CardinalConverter::convert("-5"), "minus five");

    let vigintillion = format!("1{}", "0".repeat(63));
    assert_eq!(CardinalConverter::convert(&vigintillion), "one vigintillion");

    // 超出量级表的分组不加后缀
    let beyond = format!("1{}", "0".repeat(66));
    assert_eq!(CardinalConverter::convert(&beyond), "one");
}

/// 基数词的单词取值（"hundred" 和量级词另行处理）
fn word_value(word: &str) -> Option<u32> {
    let value = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

/// 把基数词读法还原为十进制数字串
///
/// 按量级词切分出三位分组，量级必须严格递减，缺失的分组补 "000"。
/// 读法不合法（量级重复、乱序、空分组带量级）时返回 None。
fn spoken_to_digits(spoken: &str) -> Option<String> {
    if spoken == "zero" {
        return Some("0".to_string());
    }

    // (量级深度, 分组值)，深度 0 为最低三位
    let mut chunks: Vec<(usize, u32)> = Vec::new();
    let mut current = 0u32;
    let mut has_words = false;

    for word in spoken.split(' ') {
        if word == "hundred" {
            if !(1..=9).contains(&current) {
                return None;
            }
            current *= 100;
            continue;
        }

        if let Some(index) = SCALE_SUFFIXES.iter().position(|s| *s == word) {
            let depth = index + 1;
            if !has_words || current >= 1000 {
                return None;
            }
            if chunks.last().map_or(false, |(prev, _)| *prev <= depth) {
                return None;
            }
            chunks.push((depth, current));
            current = 0;
            has_words = false;
            continue;
        }

        current += word_value(word)?;
        has_words = true;
    }

    if has_words {
        if current >= 1000 {
            return None;
        }
        chunks.push((0, current));
    }

    let top = chunks.first()?.0;
    let mut digits = String::new();
    for depth in (0..=top).rev() {
        let value = chunks
            .iter()
            .find(|(d, _)| *d == depth)
            .map_or(0, |(_, v)| *v);
        if digits.is_empty() {
            digits = value.to_string();
        } else {
            digits.push_str(&format!("{:03}", value));
        }
    }
    Some(digits)
}

#[test]
fn test_cardinal_interior_zero_chunks() {
    assert_eq!(CardinalConverter::convert("1000000001"), "one billion one");
    assert_eq!(CardinalConverter::convert("1000000000000"), "one trillion");
    assert_eq!(
        CardinalConverter::convert("1002003004"),
        "one billion two million three thousand four"
    );

    for digits in ["1000000001", "1000000000000", "1002003004", "5000070", "900000000000000001"] {
        let spoken = CardinalConverter::convert(digits);
        assert_eq!(spoken_to_digits(&spoken).as_deref(), Some(digits), "{}", spoken);
    }
}

#[test]
fn test_spoken_to_digits_rejects_bad_scales() {
    assert_eq!(spoken_to_digits("one million one million"), None);
    assert_eq!(spoken_to_digits("one thousand two million"), None);
    assert_eq!(spoken_to_digits("one billion million"), None);
}

#[test]
fn test_fraction_glyphs() {
    assert_eq!(FractionConverter::convert("½"), "one half");
    assert_eq!(FractionConverter::convert("1½"), "one and a half");
    assert_eq!(FractionConverter::convert("8 1/2"), "eight and a half");
}

#[test]
fn test_money_decimal_support() {
    let lexicon = Lexicon::shared();
    assert_eq!(MoneyConverter::convert("$1.56", &lexicon), "one dollar and fifty six cents");
    assert_eq!(MoneyConverter::convert("$0.15", &lexicon), "fifteen cents");
    assert_eq!(MoneyConverter::convert("€3.5 million", &lexicon), "three point five million euros");
}

#[test]
fn test_measure_plurality() {
    assert_eq!(MeasureConverter::convert("5/km2"), "five per square kilometers");
    assert_eq!(MeasureConverter::convert("60 km/h"), "sixty kilometers per hour");
    assert_eq!(MeasureConverter::convert("1 kg"), "one kilogram");
}

#[test]
fn test_date_disambiguation() {
    assert_eq!(
        DateConverter::convert("13-05-2020"),
        "the thirteenth of may twenty twenty"
    );
    assert!(DateConverter::convert("05-13-2020").contains("thirteenth"));
    assert_eq!(DateConverter::convert("1990s"), "nineteen nineties");
}

#[test]
fn test_plain_and_punct_idempotent() {
    let lexicon = Lexicon::shared();
    for word in ["colour", "Hauptstrasse", "world", "O'Brien", "naïve"] {
        let once = PlainConverter::convert(word, &lexicon);
        assert_eq!(PlainConverter::convert(&once, &lexicon), once);
    }
    for mark in ["!", "...", "«"] {
        let once = PunctConverter::convert(mark);
        assert_eq!(PunctConverter::convert(&once), once);
    }
}

proptest! {
    #[test]
    fn prop_cardinal_has_no_and_or_hyphen(n in any::<u64>()) {
        let spoken = CardinalConverter::convert(&n.to_string());
        prop_assert!(!spoken.split(' ').any(|w| w == "and"));
        prop_assert!(!spoken.contains('-'));
        prop_assert!(!spoken.is_empty());
    }

    #[test]
    fn prop_cardinal_long_digit_strings(digits in "[1-9][0-9]{0,65}") {
        let spoken = CardinalConverter::convert(&digits);
        prop_assert!(!spoken.split(' ').any(|w| w == "and"));
        prop_assert!(!spoken.contains('-'));
        prop_assert!(!spoken.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prop_cardinal_chunks_rebuild_u64(n in any::<u64>()) {
        let spoken = CardinalConverter::convert(&n.to_string());
        prop_assert_eq!(spoken_to_digits(&spoken), Some(n.to_string()));
    }

    #[test]
    fn prop_cardinal_chunks_rebuild_long_strings(digits in "[1-9][0-9]{0,65}") {
        let spoken = CardinalConverter::convert(&digits);
        prop_assert_eq!(spoken_to_digits(&spoken), Some(digits.clone()));
    }
}
