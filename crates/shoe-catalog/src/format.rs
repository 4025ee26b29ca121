//! Display formatting helpers shared by catalog views.

use crate::money::Money;

/// Format a price with its currency symbol, thousands grouping and the
/// currency's decimal places.
///
/// ```
/// use shoe_catalog::{format_price, Money};
/// assert_eq!(format_price(Money::usd(165000)), "$1,650.00");
/// ```
pub fn format_price(price: Money) -> String {
    let places = price.currency.decimal_places();
    let divisor = 10_u64.pow(places);
    let abs = price.amount_cents.unsigned_abs();
    let major = group_thousands(abs / divisor);
    let sign = if price.amount_cents < 0 { "-" } else { "" };

    if places == 0 {
        format!("{}{}{}", sign, price.currency.symbol(), major)
    } else {
        let minor = abs % divisor;
        format!(
            "{}{}{}.{:0width$}",
            sign,
            price.currency.symbol(),
            major,
            minor,
            width = places as usize
        )
    }
}

/// Count label with a naive English plural: `"1 Color"`, `"3 Colors"`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
