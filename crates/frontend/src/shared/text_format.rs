//! Formatting helpers for generated content

/// Formats a fraction as a percentage with the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::text_format::format_percent;
///
/// assert_eq!(format_percent(0.873, 1), "87.3%");
/// ```
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Formats a price in dollars; absent or zero prices have nothing to show
///
/// # Examples
///
/// ```
/// use frontend::shared::text_format::format_price;
///
/// assert_eq!(format_price(Some(9.99)).as_deref(), Some("$9.99"));
/// assert_eq!(format_price(None), None);
/// ```
pub fn format_price(price: Option<f64>) -> Option<String> {
    price
        .filter(|p| *p != 0.0 && !p.is_nan())
        .map(|p| format!("${}", p))
}

/// Splits newline-delimited text into lines, keeping empty ones
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.873, 1), "87.3%");
        assert_eq!(format_percent(1.0, 1), "100.0%");
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(0.12344, 2), "12.34%");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(9.99)).as_deref(), Some("$9.99"));
        assert_eq!(format_price(Some(10.0)).as_deref(), Some("$10"));
        assert_eq!(format_price(Some(0.0)), None);
        assert_eq!(format_price(Some(f64::NAN)), None);
        assert_eq!(format_price(None), None);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("Line1\nLine2"), vec!["Line1", "Line2"]);
        assert_eq!(split_lines("A\n\nB"), vec!["A", "", "B"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("Tail\n"), vec!["Tail", ""]);
    }
}
