//! Display Formatting

/// Format a price as rupees with grouped thousands, e.g. `₹1,234.50`
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}₹{}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "₹0.00");
        assert_eq!(format_price(5.0), "₹5.00");
        assert_eq!(format_price(999.999), "₹1,000.00");
        assert_eq!(format_price(1234.5), "₹1,234.50");
        assert_eq!(format_price(1_234_567.891), "₹1,234,567.89");
        assert_eq!(format_price(-12.3), "-₹12.30");
    }
}
