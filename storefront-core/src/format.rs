//! Display formatting shared by the renderer and the reports.

/// Render a number the way a browser's `Number#toString` does for catalog-sized values:
/// no trailing `.0`, shortest round-trip digits.
#[must_use]
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Fixed two-decimal amount, e.g. `20.00`, rounded like `Number#toFixed(2)`.
///
/// Only odd multiples of 1/8 sit exactly halfway between two cents; those round
/// away from zero. Every other value has a single nearest cent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fixed2(value: f64) -> String {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    let eighths = (value * 8.0).abs();
    if eighths.fract() == 0.0 && eighths < EXACT_LIMIT && (eighths as u64) % 2 == 1 {
        let cents = ((eighths as u64) * 25).div_ceil(2);
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }
    format!("{value:.2}")
}

/// Catalog price as shown on a product card, e.g. `$109.95` or `$55`.
#[must_use]
pub fn card_price(price: f64) -> String {
    format!("${}", js_number(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_number_drops_trailing_zero_fraction() {
        assert_eq!(js_number(55.0), "55");
        assert_eq!(js_number(22.3), "22.3");
        assert_eq!(js_number(109.95), "109.95");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn fixed2_pads_and_rounds() {
        assert_eq!(fixed2(20.0), "20.00");
        assert_eq!(fixed2(7.456), "7.46");
        assert_eq!(card_price(9.85), "$9.85");
    }

    #[test]
    fn fixed2_rounds_exact_halves_away_from_zero() {
        assert_eq!(fixed2(0.125), "0.13");
        assert_eq!(fixed2(10.125), "10.13");
        assert_eq!(fixed2(0.375), "0.38");
        assert_eq!(fixed2(2.5), "2.50");
        assert_eq!(fixed2(-0.125), "-0.13");
        // 1.005 is stored just below the half, so it rounds down.
        assert_eq!(fixed2(1.005), "1.00");
        assert_eq!(fixed2(f64::NAN), "NaN");
    }
}
