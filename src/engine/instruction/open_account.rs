use crate::engine::{
    account::Currency,
    error::InstructionError,
    instruction::{InstructionKind, InstructionRecord},
    money::Money,
    Decimal,
};

/// A validated account-opening instruction.
///
/// Opens a single-currency account with a starting balance. At most one
/// account may exist per currency; the engine rejects duplicates when the
/// instruction is processed.
#[derive(Debug, Clone)]
pub struct OpenAccount {
    currency: Currency,
    balance: Money,
}

impl OpenAccount {
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn balance(&self) -> Money {
        self.balance
    }
}

impl TryFrom<InstructionRecord> for OpenAccount {
    type Error = InstructionError;

    fn try_from(record: InstructionRecord) -> Result<Self, Self::Error> {
        match record {
            InstructionRecord {
                kind: InstructionKind::Open,
                currency,
                counter: None,
                limit: None,
                amount: Some(amount),
            } if amount >= Decimal::ZERO && amount.scale() <= 2 => Ok(OpenAccount {
                currency,
                balance: Money::from(amount),
            }),
            _ => Err(InstructionError::InvalidInstruction(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_record(amount: Option<Decimal>) -> InstructionRecord {
        InstructionRecord {
            kind: InstructionKind::Open,
            currency: Currency::from("eur"),
            counter: None,
            limit: None,
            amount,
        }
    }

    #[test]
    fn test_valid_open() {
        let record = make_record(Some(dec!(100.50)));
        let open = OpenAccount::try_from(record).unwrap();

        assert_eq!(*open.currency(), Currency::from("eur"));
        assert_eq!(open.balance(), Money::from(dec!(100.50)));
    }

    #[test]
    fn test_accepts_zero_starting_balance() {
        let record = make_record(Some(dec!(0)));
        let open = OpenAccount::try_from(record).unwrap();
        assert_eq!(open.balance(), Money::ZERO);
    }

    #[test]
    fn test_rejects_negative_balance() {
        let record = make_record(Some(dec!(-100)));
        assert!(OpenAccount::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_more_than_2_decimals() {
        let record = make_record(Some(dec!(1.234)));
        assert!(OpenAccount::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_missing_balance() {
        let record = make_record(None);
        assert!(OpenAccount::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_counter_currency() {
        let record = InstructionRecord {
            counter: Some(Currency::from("pln")),
            ..make_record(Some(dec!(100)))
        };
        assert!(OpenAccount::try_from(record).is_err());
    }

    #[test]
    fn test_rejects_wrong_instruction_kind() {
        let record = InstructionRecord {
            kind: InstructionKind::Rate,
            ..make_record(Some(dec!(100)))
        };
        assert!(OpenAccount::try_from(record).is_err());
    }
}
