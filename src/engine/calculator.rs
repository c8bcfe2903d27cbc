use super::error::ExchangeError;
use super::money::Money;

/// Pure conversion arithmetic between amounts of two currencies.
///
/// Stateless; the exchanger default-constructs one of its own unless the
/// caller injects one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    /// Returns the amount of target currency received when `amount` of
    /// source currency is exchanged at `rate`.
    ///
    /// The product keeps its full precision; callers that need
    /// currency-grade output round separately.
    pub fn compute_target_amount(
        &self,
        amount: Option<Money>,
        rate: Option<Money>,
    ) -> Result<Money, ExchangeError> {
        let (amount, rate) = check_amount_and_rate(amount, rate)?;
        Ok(amount * rate)
    }

    /// Returns the smallest source amount that, exchanged at `rate`, yields
    /// no less than `target_amount` of target currency.
    ///
    /// When paying a fixed obligation in a foreign currency the caller can
    /// name the exact expected amount and still be certain to receive
    /// enough, at the cost of at most one extra cent of source currency.
    pub fn compute_source_amount(
        &self,
        target_amount: Option<Money>,
        rate: Option<Money>,
    ) -> Result<Money, ExchangeError> {
        let (target_amount, rate) = check_amount_and_rate(target_amount, rate)?;
        let source_amount = (target_amount / rate).round_to_cents();
        if source_amount * rate < target_amount {
            Ok(source_amount + Money::cent())
        } else {
            Ok(source_amount)
        }
    }
}

fn check_amount_and_rate(
    amount: Option<Money>,
    rate: Option<Money>,
) -> Result<(Money, Money), ExchangeError> {
    let rate = rate.ok_or(ExchangeError::InvalidArgument("exchange rate is required"))?;
    let amount = amount.ok_or(ExchangeError::InvalidArgument("amount of money is required"))?;
    if rate <= Money::ZERO {
        return Err(ExchangeError::InvalidArgument(
            "exchange rate must be positive",
        ));
    }
    Ok((amount, rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Decimal;
    use rust_decimal_macros::dec;

    fn money(value: Decimal) -> Option<Money> {
        Some(Money::from(value))
    }

    #[test]
    fn test_computes_target_amount() {
        let calculator = Calculator::new();
        let target = calculator
            .compute_target_amount(money(dec!(100)), money(dec!(4.19)))
            .unwrap();

        assert_eq!(target, Money::from(dec!(419)));
    }

    #[test]
    fn test_target_amount_keeps_full_precision() {
        let calculator = Calculator::new();
        let target = calculator
            .compute_target_amount(money(dec!(95.71)), money(dec!(4.19)))
            .unwrap();

        assert_eq!(target, Money::from(dec!(401.0249)));
    }

    #[test]
    fn test_source_amount_when_quotient_suffices() {
        // 400 / 4.19 rounds to 95.47 and 95.47 * 4.19 == 400.0193 >= 400
        let calculator = Calculator::new();
        let source = calculator
            .compute_source_amount(money(dec!(400)), money(dec!(4.19)))
            .unwrap();

        assert_eq!(source, Money::from(dec!(95.47)));
    }

    #[test]
    fn test_source_amount_adds_cent_when_quotient_undershoots() {
        // 401 / 4.19 rounds to 95.70 but 95.70 * 4.19 == 400.983 < 401
        let calculator = Calculator::new();
        let source = calculator
            .compute_source_amount(money(dec!(401)), money(dec!(4.19)))
            .unwrap();

        assert_eq!(source, Money::from(dec!(95.71)));
    }

    #[test]
    fn test_source_amount_exact_division_has_no_surcharge() {
        // 200.03 / 4.15 == 48.20 exactly
        let calculator = Calculator::new();
        let source = calculator
            .compute_source_amount(money(dec!(200.03)), money(dec!(4.15)))
            .unwrap();

        assert_eq!(source, Money::from(dec!(48.20)));
    }

    #[test]
    fn test_rate_of_one_is_identity() {
        let calculator = Calculator::new();

        let target = calculator
            .compute_target_amount(money(dec!(12.34)), money(dec!(1)))
            .unwrap();
        assert_eq!(target, Money::from(dec!(12.34)));

        let source = calculator
            .compute_source_amount(money(dec!(12.34)), money(dec!(1)))
            .unwrap();
        assert_eq!(source, Money::from(dec!(12.34)));
    }

    #[test]
    fn test_missing_amount_is_invalid() {
        let calculator = Calculator::new();

        assert!(calculator
            .compute_target_amount(None, money(dec!(4.19)))
            .is_err());
        assert!(calculator
            .compute_source_amount(None, money(dec!(4.19)))
            .is_err());
    }

    #[test]
    fn test_missing_rate_is_invalid() {
        let calculator = Calculator::new();

        assert!(calculator
            .compute_target_amount(money(dec!(100)), None)
            .is_err());
        assert!(calculator
            .compute_source_amount(money(dec!(100)), None)
            .is_err());
    }

    #[test]
    fn test_non_positive_rate_is_invalid() {
        let calculator = Calculator::new();

        assert!(calculator
            .compute_target_amount(money(dec!(100)), money(dec!(0)))
            .is_err());
        assert!(calculator
            .compute_source_amount(money(dec!(100)), money(dec!(-4.19)))
            .is_err());
    }

    #[test]
    fn test_round_trip_never_shortchanges() {
        let calculator = Calculator::new();
        let amounts = [
            dec!(0.01),
            dec!(1),
            dec!(123.45),
            dec!(200.03),
            dec!(401),
            dec!(999.99),
        ];
        let rates = [
            dec!(0.07),
            dec!(0.5),
            dec!(1),
            dec!(3.14),
            dec!(4.15),
            dec!(4.19),
        ];

        for amount in amounts {
            for rate in rates {
                let source = calculator
                    .compute_source_amount(money(amount), money(rate))
                    .unwrap();
                let back = calculator
                    .compute_target_amount(Some(source), money(rate))
                    .unwrap();
                assert!(
                    back >= Money::from(amount),
                    "{amount} at rate {rate}: source {source} converts back to {back}"
                );
            }
        }
    }
}
