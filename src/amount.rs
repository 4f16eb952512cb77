//! Fixed-point amounts as stored by the ledger: signed 64-bit integers scaled by 10^7.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Number of stroops in one unit.
pub const ONE: i64 = 10_000_000;

pub const DECIMAL_PLACES: u32 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("`{0}` is not a decimal amount")]
    Invalid(String),
    #[error("`{0}` has more than 7 fractional digits")]
    TooPrecise(String),
    #[error("`{0}` does not fit into a 64-bit amount")]
    OutOfRange(String),
}

/// Renders a scaled amount with exactly [`DECIMAL_PLACES`] fractional digits.
pub fn format(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    // unsigned_abs keeps i64::MIN representable
    let abs = stroops.unsigned_abs();
    let one = ONE as u64;
    format!(
        "{sign}{}.{:0width$}",
        abs / one,
        abs % one,
        width = DECIMAL_PLACES as usize
    )
}

/// Inverse of [`format`]. Accepts any plain decimal string whose value is an exact
/// multiple of one stroop, e.g. `"12"`, `"-0.5"` or `"123.4567890"`.
pub fn parse(input: &str) -> Result<i64, AmountError> {
    // rust_decimal tolerates digit separators, the ledger format never has them
    if input.contains('_') {
        return Err(AmountError::Invalid(input.to_owned()));
    }
    // checked on the raw text, Decimal rounds past 28 significant digits
    if let Some((_, fraction)) = input.split_once('.') {
        if fraction.trim_end_matches('0').len() > DECIMAL_PLACES as usize {
            return Err(AmountError::TooPrecise(input.to_owned()));
        }
    }
    let value = Decimal::from_str(input).map_err(|_| AmountError::Invalid(input.to_owned()))?;
    value
        .checked_mul(Decimal::from(ONE))
        .and_then(|scaled| scaled.to_i128())
        .and_then(|scaled| i64::try_from(scaled).ok())
        .ok_or_else(|| AmountError::OutOfRange(input.to_owned()))
}

/// Exact decimal value of a scaled amount.
pub fn to_decimal(stroops: i64) -> Decimal {
    Decimal::new(stroops, DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amounts() {
        assert_eq!(format(0), "0.0000000");
        assert_eq!(format(1), "0.0000001");
        assert_eq!(format(-1), "-0.0000001");
        assert_eq!(format(ONE), "1.0000000");
        assert_eq!(format(500000000), "50.0000000");
        assert_eq!(format(1234567890), "123.4567890");
        assert_eq!(format(-1234567890), "-123.4567890");
        assert_eq!(format(9000000000000), "900000.0000000");
        assert_eq!(format(i64::MAX), "922337203685.4775807");
        assert_eq!(format(i64::MIN), "-922337203685.4775808");
    }

    #[test]
    fn formatted_amounts_have_fixed_precision() {
        for value in [0, 7, -7, 10, 99_999_999, -100_000_001, i64::MAX, i64::MIN] {
            let text = format(value);
            let (_, fraction) = text.split_once('.').unwrap();
            assert_eq!(fraction.len(), 7, "{text}");
            assert!(!text.contains('e') && !text.contains('E'), "{text}");
            assert_eq!(parse(&text).unwrap(), value, "{text}");
        }
    }

    #[test]
    fn parse_amounts() {
        assert_eq!(parse("1").unwrap(), ONE);
        assert_eq!(parse("-0.5").unwrap(), -5_000_000);
        assert_eq!(parse("123.456789").unwrap(), 1234567890);
        // trailing zeros past the scale are still exact
        assert_eq!(parse("1.000000000").unwrap(), ONE);

        assert_eq!(
            parse("0.00000001").unwrap_err(),
            AmountError::TooPrecise("0.00000001".to_owned())
        );
        // longer than Decimal can hold, must not be rounded into range
        for input in [
            "1.00000000000000000000000000001",
            "0.000000000000000000000000000049",
        ] {
            assert_eq!(
                parse(input).unwrap_err(),
                AmountError::TooPrecise(input.to_owned())
            );
        }
        assert!(matches!(parse("abc"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse(""), Err(AmountError::Invalid(_))));
        assert!(matches!(parse("1_000"), Err(AmountError::Invalid(_))));
        assert!(matches!(
            parse("922337203685.4775808"),
            Err(AmountError::OutOfRange(_))
        ));
    }

    #[test]
    fn decimal_value_is_exact() {
        assert_eq!(to_decimal(1234567890), Decimal::from_str("123.4567890").unwrap());
        assert_eq!(to_decimal(-1).to_string(), "-0.0000001");
        assert_eq!(to_decimal(i64::MIN).to_string(), format(i64::MIN));
    }
}
