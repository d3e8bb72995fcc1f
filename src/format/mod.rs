//display helpers shared by the report tables and the cli

pub const DEFAULT_CURRENCY_DECIMALS: usize = 0;
pub const DEFAULT_PERCENTAGE_DECIMALS: usize = 1;
pub const DEFAULT_MULTIPLE_DECIMALS: usize = 2;

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

//formats money with a K/M suffix once the magnitude reaches a thousand/million.
//the sign stays inside the number: -5000 -> "$-5K"
pub fn format_currency(value: f64, decimals: usize) -> String {
    if value.abs() >= MILLION {
        format!("${:.*}M", decimals, value / MILLION)
    } else if value.abs() >= THOUSAND {
        format!("${:.*}K", decimals, value / THOUSAND)
    } else {
        format!("${}", with_thousands_separator(&format!("{:.*}", decimals, value)))
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

pub fn format_multiple(value: f64, decimals: usize) -> String {
    format!("{:.*}x", decimals, value)
}

pub fn currency(value: f64) -> String {
    format_currency(value, DEFAULT_CURRENCY_DECIMALS)
}

pub fn percentage(value: f64) -> String {
    format_percentage(value, DEFAULT_PERCENTAGE_DECIMALS)
}

pub fn multiple(value: f64) -> String {
    format_multiple(value, DEFAULT_MULTIPLE_DECIMALS)
}

//inserts "," every three integer digits of an already formatted number
pub fn with_thousands_separator(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let (integer_part, fraction) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{}{}{}", sign, grouped, fraction)
}
