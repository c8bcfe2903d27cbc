use super::account::Currency;
use super::error::ExchangeError;
use super::money::Money;

/// A quoted conversion factor for an ordered pair of currencies.
///
/// One unit of the source currency buys `value` units of the target
/// currency. Immutable once constructed; owned by whoever performs the rate
/// lookup, not by an account or calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    source_currency: Currency,
    target_currency: Currency,
    value: Money,
}

impl ExchangeRate {
    /// Quote a new rate. The value must be positive.
    pub fn new(
        source_currency: Currency,
        target_currency: Currency,
        value: Money,
    ) -> Result<Self, ExchangeError> {
        if value <= Money::ZERO {
            return Err(ExchangeError::InvalidArgument(
                "exchange rate must be positive",
            ));
        }
        Ok(Self {
            source_currency,
            target_currency,
            value,
        })
    }

    pub fn source_currency(&self) -> &Currency {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &Currency {
        &self.target_currency
    }

    pub fn value(&self) -> Money {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_quote() {
        let rate = ExchangeRate::new(
            Currency::from("eur"),
            Currency::from("pln"),
            Money::from(dec!(4.15)),
        )
        .unwrap();

        assert_eq!(*rate.source_currency(), Currency::from("eur"));
        assert_eq!(*rate.target_currency(), Currency::from("pln"));
        assert_eq!(rate.value(), Money::from(dec!(4.15)));
    }

    #[test]
    fn test_rejects_zero_rate() {
        let rate = ExchangeRate::new(
            Currency::from("eur"),
            Currency::from("pln"),
            Money::ZERO,
        );
        assert!(rate.is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let rate = ExchangeRate::new(
            Currency::from("eur"),
            Currency::from("pln"),
            Money::from(dec!(-4.15)),
        );
        assert!(rate.is_err());
    }
}
