use crate::engine::{
    account::Currency,
    error::InstructionError,
    instruction::{InstructionKind, InstructionRecord},
    money::Money,
    Decimal,
};

/// A validated rate-quoting instruction.
///
/// Quotes the conversion factor for an ordered currency pair. Re-quoting a
/// pair replaces the earlier quote.
#[derive(Debug, Clone)]
pub struct SetRate {
    source_currency: Currency,
    target_currency: Currency,
    value: Money,
}

impl SetRate {
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

impl TryFrom<InstructionRecord> for SetRate {
    type Error = InstructionError;

    fn try_from(record: InstructionRecord) -> Result<Self, Self::Error> {
        match record {
            InstructionRecord {
                kind: InstructionKind::Rate,
                currency,
                counter: Some(counter),
                limit: None,
                amount: Some(amount),
            } if amount > Decimal::ZERO && currency != counter => Ok(SetRate {
                source_currency: currency,
                target_currency: counter,
                value: Money::from(amount),
            }),
            _ => Err(InstructionError::InvalidInstruction(record)),
        }
    }
}
