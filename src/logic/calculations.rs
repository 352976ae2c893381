use crate::models::SoilSample;

/// Round to 2 decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Digits needed to print any f64 exactly.
const EXACT_DIGITS: usize = 1100;

/// Format with one decimal place from the exact binary value. Exact ties
/// round away from zero (6.25 -> "6.3"); anything else rounds to nearest,
/// so 6.35, stored as 6.3499..., gives "6.3".
pub fn fixed1(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return exact;
    };
    let mut frac = frac.bytes();
    let tenths = frac.next().unwrap_or(b'0');
    let round_up = frac.next().is_some_and(|d| d >= b'5');

    // Whole part followed by the tenths digit, incremented with carry
    let mut digits: Vec<u8> = whole.bytes().chain(std::iter::once(tenths)).collect();
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 1;
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(&digits[..split]),
        digits[split] as char
    )
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Mean of N/100, P/60, K/60, each capped at 1.0.
pub fn nutrient_score(sample: &SoilSample) -> f64 {
    let n = (sample.nitrogen / 100.0).min(1.0);
    let p = (sample.phosphorus / 60.0).min(1.0);
    let k = (sample.potassium / 60.0).min(1.0);
    (n + p + k) / 3.0
}

/// 1.0 inside the 6.0-7.5 band, 0.5 outside.
pub fn ph_score(ph: f64) -> f64 {
    if (6.0..=7.5).contains(&ph) {
        1.0
    } else {
        0.5
    }
}

pub fn overall_soil_score(sample: &SoilSample) -> f64 {
    (nutrient_score(sample) + ph_score(sample.ph)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_known_values() {
        assert_eq!(round2(0.8333333), 0.83);
        assert_eq!(round2(0.7777777), 0.78);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn fixed1_rounds_half_up() {
        assert_eq!(fixed1(6.5), "6.5");
        assert_eq!(fixed1(25.0), "25.0");
        assert_eq!(fixed1(6.25), "6.3");
        assert_eq!(fixed1(18.04), "18.0");
    }

    #[test]
    fn fixed1_rounds_the_stored_value_not_its_decimal_literal() {
        assert_eq!(fixed1(6.35), "6.3");
        assert_eq!(fixed1(1.45), "1.4");
        assert_eq!(fixed1(2.55), "2.5");
        assert_eq!(fixed1(0.15), "0.1");
        assert_eq!(fixed1(0.35), "0.3");
        assert_eq!(fixed1(0.05), "0.1");
    }

    #[test]
    fn fixed1_exact_ties_round_away_from_zero() {
        assert_eq!(fixed1(6.25), "6.3");
        assert_eq!(fixed1(0.25), "0.3");
        assert_eq!(fixed1(-6.25), "-6.3");
        assert_eq!(fixed1(-1.45), "-1.4");
    }

    #[test]
    fn fixed1_carries_into_the_whole_part() {
        assert_eq!(fixed1(9.96), "10.0");
        assert_eq!(fixed1(99.95), "100.0");
        assert_eq!(fixed1(0.0), "0.0");
        assert_eq!(fixed1(7.0), "7.0");
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 0.5]), Some(0.75));
    }

    #[test]
    fn nutrient_score_caps_each_nutrient() {
        let rich = SoilSample::new(500.0, 500.0, 500.0, 7.0);
        assert!((nutrient_score(&rich) - 1.0).abs() < 1e-9);

        let half = SoilSample::new(50.0, 30.0, 30.0, 7.0);
        assert!((nutrient_score(&half) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn ph_score_band_is_inclusive() {
        assert_eq!(ph_score(6.0), 1.0);
        assert_eq!(ph_score(7.5), 1.0);
        assert_eq!(ph_score(5.99), 0.5);
        assert_eq!(ph_score(7.51), 0.5);
    }

    #[test]
    fn overall_score_blends_nutrients_and_ph() {
        // (0.5 + 1.0) / 2
        let sample = SoilSample::new(50.0, 30.0, 30.0, 6.5);
        assert!((overall_soil_score(&sample) - 0.75).abs() < 1e-9);
    }
}
