use crate::engine::{
    account::Currency,
    error::InstructionError,
    exchanger::Limit,
    instruction::{InstructionKind, InstructionRecord, LimitKind},
    money::Money,
    Decimal,
};

/// A validated exchange instruction.
///
/// Moves money from the source-currency account to the counter-currency
/// account at the latest quoted rate, optionally bounded by a limit. A limit
/// kind and a limit amount must be given together; a row with only one of
/// them is invalid rather than silently unlimited.
#[derive(Debug, Clone)]
pub struct Exchange {
    source_currency: Currency,
    target_currency: Currency,
    limit: Limit,
}

impl Exchange {
    pub fn source_currency(&self) -> &Currency {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &Currency {
        &self.target_currency
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }
}

impl TryFrom<InstructionRecord> for Exchange {
    type Error = InstructionError;

    fn try_from(record: InstructionRecord) -> Result<Self, Self::Error> {
        match record {
            InstructionRecord {
                kind: InstructionKind::Exchange,
                currency,
                counter: Some(counter),
                limit: None,
                amount: None,
            } if currency != counter => Ok(Exchange {
                source_currency: currency,
                target_currency: counter,
                limit: Limit::None,
            }),
            InstructionRecord {
                kind: InstructionKind::Exchange,
                currency,
                counter: Some(counter),
                limit: Some(kind),
                amount: Some(amount),
            } if amount > Decimal::ZERO && amount.scale() <= 2 && currency != counter => {
                let amount = Money::from(amount);
                Ok(Exchange {
                    source_currency: currency,
                    target_currency: counter,
                    limit: match kind {
                        LimitKind::Source => Limit::Source(amount),
                        LimitKind::Target => Limit::Target(amount),
                    },
                })
            }
            _ => Err(InstructionError::InvalidInstruction(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_record(limit: Option<LimitKind>, amount: Option<Decimal>) -> InstructionRecord {
        InstructionRecord {
            kind: InstructionKind::Exchange,
            currency: Currency::from("eur"),
            counter: Some(Currency::from("pln")),
            limit,
            amount,
        }
    }

    #[test]
    fn test_valid_unlimited_exchange() {
        let record = make_record(None, None);
        let exchange = Exchange::try_from(record).unwrap();

        assert_eq!(*exchange.source_currency(), Currency::from("eur"));
        assert_eq!(*exchange.target_currency(), Currency::from("pln"));
        assert_eq!(exchange.limit(), Limit::None);
    }

    #[test]
    fn test_valid_source_limited_exchange() {
        let record = make_record(Some(LimitKind::Source), Some(dec!(50)));
        let exchange = Exchange::try_from(record).unwrap();

        assert_eq!(exchange.limit(), Limit::Source(Money::from(dec!(50))));
    }

    #[test]
    fn test_valid_target_limited_exchange() {
        let record = make_record(Some(LimitKind::Target), Some(dec!(200.03)));
        let exchange = Exchange::try_from(record).unwrap();

        assert_eq!(exchange.limit(), Limit::Target(Money::from(dec!(200.03))));
    }

    #[test]
    fn test_rejects_limit_kind_without_amount() {
        let record = make_record(Some(LimitKind::Source), None);
        assert!(Exchange::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_amount_without_limit_kind() {
        let record = make_record(None, Some(dec!(50)));
        assert!(Exchange::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_zero_limit_amount() {
        let record = make_record(Some(LimitKind::Source), Some(dec!(0)));
        assert!(Exchange::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_more_than_2_decimals() {
        let record = make_record(Some(LimitKind::Target), Some(dec!(1.234)));
        assert!(Exchange::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_missing_counter_currency() {
        let record = InstructionRecord {
            counter: None,
            ..make_record(None, None)
        };
        assert!(Exchange::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_identical_pair() {
        let record = InstructionRecord {
            counter: Some(Currency::from("eur")),
            ..make_record(None, None)
        };
        assert!(Exchange::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_wrong_instruction_kind() {
        let record = InstructionRecord {
            kind: InstructionKind::Open,
            ..make_record(None, None)
        };
        assert!(Exchange::try_from(record).is_err());
    }
}
