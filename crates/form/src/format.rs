//! Keystroke normalization for the masked inputs (mobile number, date).
//!
//! Formatting is a pure function of the digit sequence: separators in the raw
//! input are ignored, so re-feeding a formatted value produces the same
//! output. There is no error path; excess digits are dropped.

/// Strip everything but ASCII digits, capped at `max` digits.
fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Format a raw mobile-number input as `AAAAA-BBBBB`.
///
/// The first five digits land before the separator, the next five after it;
/// either half may be short or empty while the user is still typing. The
/// separator is always emitted, so zero digits format as `"-"`.
pub fn format_phone(raw: &str) -> String {
    let digits = digits(raw, 10);
    let split = digits.len().min(5);
    format!("{}-{}", &digits[..split], &digits[split..])
}

/// Format a raw date input as `DD-MM-YYYY`.
///
/// Digits are sliced positionally (two for the day, two for the month, four
/// for the year); any segment may be partial or empty. Both separators are
/// always emitted, so zero digits format as `"--"`.
pub fn format_date(raw: &str) -> String {
    let digits = digits(raw, 8);
    let day_end = digits.len().min(2);
    let month_end = digits.len().min(4);
    format!(
        "{}-{}-{}",
        &digits[..day_end],
        &digits[day_end..month_end],
        &digits[month_end..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_splits_five_five() {
        assert_eq!(format_phone("1234567890"), "12345-67890");
        assert_eq!(format_phone("123"), "123-");
        assert_eq!(format_phone("123456"), "12345-6");
    }

    #[test]
    fn phone_ignores_existing_separators() {
        assert_eq!(format_phone("12345-67890"), "12345-67890");
        assert_eq!(format_phone("(12) 345 678-90"), "12345-67890");
    }

    #[test]
    fn phone_drops_excess_digits() {
        assert_eq!(format_phone("123456789012345"), "12345-67890");
    }

    #[test]
    fn phone_empty_input_keeps_separator() {
        assert_eq!(format_phone(""), "-");
        assert_eq!(format_phone("abc"), "-");
    }

    #[test]
    fn phone_output_bounds() {
        for n in 0..=10 {
            let input: String = "9".repeat(n);
            let out = format_phone(&input);
            assert!(out.len() <= 11);
            assert_eq!(out.matches('-').count(), 1);
        }
    }

    #[test]
    fn phone_digit_round_trip() {
        for n in 0..=10 {
            let input: String = ('0'..='9').cycle().take(n).collect();
            let out = format_phone(&input);
            let back: String = out.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(back, input);
        }
    }

    #[test]
    fn date_slices_day_month_year() {
        assert_eq!(format_date("01012000"), "01-01-2000");
        assert_eq!(format_date("0101"), "01-01-");
        assert_eq!(format_date("312"), "31-2-");
        assert_eq!(format_date(""), "--");
    }

    #[test]
    fn date_ignores_existing_separators() {
        assert_eq!(format_date("01-01-2000"), "01-01-2000");
        assert_eq!(format_date("01/01/2000"), "01-01-2000");
    }

    #[test]
    fn date_drops_excess_digits() {
        assert_eq!(format_date("010120001234"), "01-01-2000");
    }

    #[test]
    fn date_output_bounds_and_round_trip() {
        for n in 0..=8 {
            let input: String = "7".repeat(n);
            let out = format_date(&input);
            assert!(out.len() <= 10);
            assert_eq!(out.matches('-').count(), 2);
            let back: String = out.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(back, input);
        }
    }

    #[test]
    fn formatting_is_idempotent_on_own_output() {
        assert_eq!(format_phone(&format_phone("9876543210")), "98765-43210");
        assert_eq!(format_date(&format_date("31121999")), "31-12-1999");
    }
}
