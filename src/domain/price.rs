//! Prices are stored as integer cents and exchanged as decimal numbers.

/// Convert a stored amount in cents to its decimal representation.
pub fn cents_to_decimal(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Convert a decimal amount to cents, rounding to the nearest cent.
///
/// Returns `None` for negative, non-finite or out-of-range values.
pub fn decimal_to_cents(value: f64) -> Option<i64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let cents = (value * 100.0).round();
    if cents > i64::MAX as f64 {
        return None;
    }

    Some(cents as i64)
}

/// `serde(with = ...)` adapter exposing an `i64` cents field as a decimal number.
pub mod as_decimal {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(super::cents_to_decimal(*cents))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        super::decimal_to_cents(value)
            .ok_or_else(|| D::Error::custom(format!("invalid price: {value}")))
    }
}
