//! 符号逐字读法

/// 整词 / 单字符符号表（希腊字母、数学符号、货币符号）
fn symbol_word(token: &str) -> Option<&'static str> {
    let spoken = match token {
        "feet" => "feet",

        "&" => "and",
        "_" => "underscore",
        "#" => "number",
        "€" => "euro",
        "$" => "dollar",
        "£" => "pound",
        "~" => "tilde",
        "%" => "percent",

        "²" => "squared",
        "³" => "cubed",
        "×" => "times",
        "=" => "equals",
        ">" => "greater than",

        "α" | "Α" => "alpha",
        "β" | "Β" => "beta",
        "γ" | "Γ" => "gamma",
        "δ" | "Δ" => "delta",
        "ε" | "Ε" => "epsilon",
        "ζ" | "Ζ" => "zeta",
        "η" | "Η" => "eta",
        "θ" | "Θ" => "theta",
        "ι" | "Ι" => "iota",
        "κ" | "Κ" => "kappa",
        "λ" | "Λ" => "lambda",
        "μ" | "Μ" => "mu",
        "ν" | "Ν" => "nu",
        "ξ" | "Ξ" => "xi",
        "ο" | "Ο" => "omicron",
        "π" | "Π" => "pi",
        "ρ" | "Ρ" => "rho",
        "ς" | "σ" | "Σ" | "Ϲ" | "ϲ" => "sigma",
        "τ" | "Τ" => "tau",
        "υ" | "Υ" => "upsilon",
        "φ" | "Φ" => "phi",
        "χ" | "Χ" => "chi",
        "ψ" | "Ψ" => "psi",
        "ω" | "Ω" => "omega",

        "µ" => "micro",
        _ => return None,
    };
    Some(spoken)
}

/// 逐字转换器
pub struct VerbatimConverter;

impl VerbatimConverter {
    /// 符号表中的整词直接返回读法；单个字符原样返回；其余逐字符读
    pub fn convert(text: &str) -> String {
        if let Some(spoken) = symbol_word(text) {
            return spoken.to_string();
        }

        let mut chars = text.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return ch.to_string();
        }

        text.chars()
            .map(Self::convert_char)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 单个字符的读法
    ///
    /// 数字逐字母拼读（"1" → "o n e"），"." → "dot"，"-" → "d a s h"，其余转小写
    pub fn convert_char(ch: char) -> String {
        let spelled = match ch {
            '.' => "dot",
            '-' => "d a s h",
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
            _ => {
                let mut buf = [0u8; 4];
                return match symbol_word(ch.encode_utf8(&mut buf)) {
                    Some(spoken) => spoken.to_string(),
                    None => ch.to_lowercase().collect(),
                };
            }
        };
        spelled.to_string()
    }
}
