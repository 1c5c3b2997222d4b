//! 数词基础表
//!
//! 数字名、个位、十几、整十、量级后缀，以及基数词 → 序数词的词尾替换表。
//! 全部为编译期常量，进程内只读。

/// 量级后缀（按数量级排列，thousand = 10^3 … vigintillion = 10^63）
pub const SCALE_SUFFIXES: &[&str] = &[
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
];

/// 单个数字的读法（0 读作 "o"）
pub fn digit_word(ch: char) -> Option<&'static str> {
    match ch {
        '0' => Some("o"),
        '1' => Some("one"),
        '2' => Some("two"),
        '3' => Some("three"),
        '4' => Some("four"),
        '5' => Some("five"),
        '6' => Some("six"),
        '7' => Some("seven"),
        '8' => Some("eight"),
        '9' => Some("nine"),
        _ => None,
    }
}

/// 1-9（0 不在表内，由调用方特殊处理）
pub fn small_word(n: u8) -> Option<&'static str> {
    match n {
        1 => Some("one"),
        2 => Some("two"),
        3 => Some("three"),
        4 => Some("four"),
        5 => Some("five"),
        6 => Some("six"),
        7 => Some("seven"),
        8 => Some("eight"),
        9 => Some("nine"),
        _ => None,
    }
}

/// 11-19
pub fn teen_word(n: u8) -> Option<&'static str> {
    match n {
        11 => Some("eleven"),
        12 => Some("twelve"),
        13 => Some("thirteen"),
        14 => Some("fourteen"),
        15 => Some("fifteen"),
        16 => Some("sixteen"),
        17 => Some("seventeen"),
        18 => Some("eighteen"),
        19 => Some("nineteen"),
        _ => None,
    }
}

/// 整十（参数为十位数字）
pub fn tens_word(n: u8) -> Option<&'static str> {
    match n {
        1 => Some("ten"),
        2 => Some("twenty"),
        3 => Some("thirty"),
        4 => Some("forty"),
        5 => Some("fifty"),
        6 => Some("sixty"),
        7 => Some("seventy"),
        8 => Some("eighty"),
        9 => Some("ninety"),
        _ => None,
    }
}

/// 基数词 → 序数词
pub fn ordinal_word(word: &str) -> Option<&'static str> {
    let ordinal = match word {
        "zero" => "zeroth",
        "one" => "first",
        "two" => "second",
        "three" => "third",
        "four" => "fourth",
        "five" => "fifth",
        "six" => "sixth",
        "seven" => "seventh",
        "eight" => "eighth",
        "nine" => "ninth",

        "ten" => "tenth",
        "twenty" => "twentieth",
        "thirty" => "thirtieth",
        "forty" => "fortieth",
        "fifty" => "fiftieth",
        "sixty" => "sixtieth",
        "seventy" => "seventieth",
        "eighty" => "eightieth",
        "ninety" => "ninetieth",

        "eleven" => "eleventh",
        "twelve" => "twelfth",
        "thirteen" => "thirteenth",
        "fourteen" => "fourteenth",
        "fifteen" => "fifteenth",
        "sixteen" => "sixteenth",
        "seventeen" => "seventeenth",
        "eighteen" => "eighteenth",
        "nineteen" => "nineteenth",

        "hundred" => "hundredth",
        "thousand" => "thousandth",
        "million" => "millionth",
        "billion" => "billionth",
        "trillion" => "trillionth",
        "quadrillion" => "quadrillionth",
        "quintillion" => "quintillionth",
        "sextillion" => "sextillionth",
        "septillion" => "septillionth",
        "octillion" => "octillionth",
        "nonillion" => "nonillionth",
        "decillion" => "decillionth",
        "undecillion" => "undecillionth",
        "duodecillion" => "duodecillionth",
        "tredecillion" => "tredecillionth",
        "quattuordecillion" => "quattuordecillionth",
        "quindecillion" => "quindecillionth",
        "sexdecillion" => "sexdecillionth",
        "septendecillion" => "septendecillionth",
        "octodecillion" => "octodecillionth",
        "novemdecillion" => "novemdecillionth",
        "vigintillion" => "vigintillionth",
        _ => return None,
    };
    Some(ordinal)
}

/// 将基数读法的最后一个词替换为序数形式
///
/// 表外的词统一追加 "th"。
pub fn ordinalize_last_word(cardinal: &str) -> String {
    let (head, last) = match cardinal.rsplit_once(' ') {
        Some((head, last)) => (Some(head), last),
        None => (None, cardinal),
    };

    let last = match ordinal_word(last) {
        Some(ordinal) => ordinal.to_string(),
        None => format!("{}th", last),
    };

    match head {
        Some(head) => format!("{} {}", head, last),
        None => last,
    }
}

/// 取字符串末尾的一段，语义同 `s[-from:-to]`（`to == 0` 表示到末尾）
///
/// 仅用于 ASCII 数字串。
pub(crate) fn tail(s: &str, from: usize, to: usize) -> &str {
    let len = s.len();
    let start = len.saturating_sub(from);
    let end = len.saturating_sub(to);
    if start >= end {
        return "";
    }
    s.get(start..end).unwrap_or("")
}

/// 是否为 ±1（允许前导零）
pub(crate) fn is_unit_magnitude(number: &str) -> bool {
    number.trim_start_matches('-').trim_start_matches('0') == "1"
}
