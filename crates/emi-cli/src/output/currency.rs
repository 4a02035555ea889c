use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as currency: symbol prefix, thousands grouping, two fixed
/// decimals, halves rounded away from zero.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}{}{}.{}", sign, symbol, group_thousands(int_part), frac_part)
}

/// Insert a comma every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
