//! Price and stock parsing.

const CURRENCY_SYMBOLS: [char; 4] = ['¥', '$', '€', '£'];

fn strip_number_noise(value: &str, strip_currency: bool) -> String {
    value
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .filter(|ch| !(strip_currency && CURRENCY_SYMBOLS.contains(ch)))
        .collect()
}

/// Parses a price cell, ignoring currency symbols, thousands separators and
/// whitespace.
///
/// Returns `None` for blank, non-numeric, non-finite or negative values.
/// Zero is a valid price.
pub fn parse_price(value: &str) -> Option<f64> {
    let cleaned = strip_number_noise(value, true);
    if cleaned.is_empty() {
        return None;
    }
    let price = cleaned.parse::<f64>().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

/// Parses a stock cell. Anything unusable counts as zero stock.
///
/// Fractional quantities are truncated; negative quantities clamp to zero.
pub fn parse_stock(value: &str) -> u32 {
    let cleaned = strip_number_noise(value, false);
    if let Ok(stock) = cleaned.parse::<i64>() {
        return u32::try_from(stock.max(0)).unwrap_or(u32::MAX);
    }
    match cleaned.parse::<f64>() {
        // `as` saturates, so out-of-range values clamp rather than wrap.
        Ok(stock) if stock.is_finite() => stock.trunc().max(0.0) as u32,
        _ => 0,
    }
}
