/// Rupee figures the way the portal displays them: crores for dashboard
/// cards, lakhs for table cells, comma-grouped integers elsewhere.

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

pub fn rupees_crore(amount: i64) -> String {
    format!("₹{:.1}Cr", amount as f64 / CRORE)
}

pub fn rupees_lakh(amount: i64) -> String {
    format!("₹{:.1}L", amount as f64 / LAKH)
}

/// Comma-grouped rendering of a non-negative count (e.g. beneficiaries).
pub fn grouped(count: i64) -> String {
    let digits = count.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if count < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// One-decimal percentage string, matching the dashboard's `toFixed(1)`.
pub fn percent(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crore_formatting() {
        assert_eq!(rupees_crore(5_000_000), "₹0.5Cr");
        assert_eq!(rupees_crore(61_500_000), "₹6.2Cr");
        assert_eq!(rupees_crore(0), "₹0.0Cr");
    }

    #[test]
    fn lakh_formatting() {
        assert_eq!(rupees_lakh(5_000_000), "₹50.0L");
        assert_eq!(rupees_lakh(350_000), "₹3.5L");
    }

    #[test]
    fn grouping() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1_200), "1,200");
        assert_eq!(grouped(10_480), "10,480");
        assert_eq!(grouped(3_200_000), "3,200,000");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(percent(96.0), "96.0");
        assert_eq!(percent(77.55), "77.5");
    }
}
