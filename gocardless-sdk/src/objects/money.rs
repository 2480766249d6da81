use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Convert an amount in major currency units to the minor units the API
/// expects (pence, cents, öre, øre): `12.25` becomes `1225`.
///
/// Fractions of a minor unit are truncated. Returns `None` if the result
/// does not fit in an `i64`.
pub fn centify(amount: Decimal) -> Option<i64> {
    amount.checked_mul(Decimal::ONE_HUNDRED)?.trunc().to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_centify() {
        assert_eq!(centify(Decimal::from_str("12.25").unwrap()), Some(1225));
        assert_eq!(centify(Decimal::from(10)), Some(1000));
        assert_eq!(centify(Decimal::from_str("0.019").unwrap()), Some(1));
        assert_eq!(centify(Decimal::ZERO), Some(0));
        assert_eq!(centify(Decimal::MAX), None);
    }
}
