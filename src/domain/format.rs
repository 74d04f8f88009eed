//! Display formatting for the results panel.

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

fn group_number(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    match rest.split_once('.') {
        Some((int_part, frac)) => format!("{}{}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}{}", sign, group_thousands(rest)),
    }
}

/// Currency with two decimals and thousands grouping: `$1,234.56`.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_number(&format!("{:.2}", value)))
}

/// Unit quantity with up to four decimals, trailing zeros trimmed.
pub fn format_units(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    group_number(trimmed)
}

/// Risk/reward ratio rendered as `1 : N.NN`.
pub fn format_ratio(ratio: f64) -> String {
    format!("1 : {:.2}", ratio)
}
