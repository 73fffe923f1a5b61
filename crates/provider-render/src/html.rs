//! Small HTML helpers shared by the sections.

pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Dollar amount with two decimals, e.g. `$24.00`.
pub(crate) fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Dollar amount without trailing zeros for whole values, e.g. `$299`.
pub(crate) fn short_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount)
    } else {
        price(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b class="x">Tom & Jerry</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
    }

    #[test]
    fn test_prices() {
        assert_eq!(price(24.0), "$24.00");
        assert_eq!(price(392.5), "$392.50");
        assert_eq!(short_price(299.0), "$299");
        assert_eq!(short_price(19.99), "$19.99");
    }
}
