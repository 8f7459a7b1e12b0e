//! Utility functions and helpers.

pub mod http;

/// Format an amount with comma thousands separators, e.g. `23456` →
/// `23,456` and `4999.5` → `4,999.5`. At most two decimals are kept.
pub fn group_thousands(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped}.{}", f / 10),
        f => format!("{sign}{grouped}.{f:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(23456.0), "23,456");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(4999.5), "4,999.5");
        assert_eq!(group_thousands(12.05), "12.05");
        assert_eq!(group_thousands(-1500.0), "-1,500");
    }
}
