use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Regex for purchase status values
    /// Must be lowercase letters separated by single underscores
    /// - Valid: "pending", "paid", "in_delivery"
    /// - Invalid: "Pending", "in-delivery", "_paid", "paid_", "in__delivery"
    pub static ref STATUS_REGEX: Regex = Regex::new(r"^[a-z]+(?:_[a-z]+)*$").unwrap();
}

/// Digits after the decimal point kept by `NUMERIC(12, 2)` money columns
const MONEY_SCALE: u32 = 2;

/// Money amounts must stay strictly below 10^10 to fit `NUMERIC(12, 2)`
const MONEY_UPPER_BOUND: i64 = 10_000_000_000;

/// Accept only amounts a money column stores as sent: not negative,
/// at most two decimal places and below 10^10.
pub fn money_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }

    if value.normalize().scale() > MONEY_SCALE {
        let mut err = ValidationError::new("money_scale");
        err.message = Some("must have at most two decimal places".into());
        return Err(err);
    }

    if *value >= Decimal::from(MONEY_UPPER_BOUND) {
        let mut err = ValidationError::new("money_range");
        err.message = Some("must be less than 10000000000".into());
        return Err(err);
    }

    Ok(())
}
