mod exchange;
mod open_account;
mod set_rate;

pub use exchange::Exchange;
pub use open_account::OpenAccount;
pub use set_rate::SetRate;

use std::fmt;

use serde::Deserialize;

use super::account::Currency;
use super::error::InstructionError;
use super::exchanger::Limit;
use super::Decimal;

/// Raw instruction row as parsed from CSV input.
/// This is the unvalidated form that needs conversion to a specific
/// instruction type.
#[derive(Debug, Deserialize, Clone)]
pub struct InstructionRecord {
    #[serde(rename = "type")]
    pub kind: InstructionKind,
    /// Account currency (for `open`) or source currency (for `rate`/`exchange`)
    pub currency: Currency,
    /// Counter currency: required for `rate`/`exchange`, must be empty for `open`
    pub counter: Option<Currency>,
    /// Side an exchange limit is denominated in; empty means no limit
    pub limit: Option<LimitKind>,
    /// Amount: starting balance for `open`, rate value for `rate`, limit amount for `exchange`
    pub amount: Option<Decimal>,
}

impl fmt::Display for InstructionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (currency: {}", self.kind, self.currency)?;
        if let Some(counter) = &self.counter {
            write!(f, ", counter: {counter}")?;
        }
        if let Some(limit) = self.limit {
            write!(f, ", limit: {limit}")?;
        }
        if let Some(amount) = self.amount {
            write!(f, ", amount: {amount}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    Open,
    Rate,
    Exchange,
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstructionKind::Open => write!(f, "open"),
            InstructionKind::Rate => write!(f, "rate"),
            InstructionKind::Exchange => write!(f, "exchange"),
        }
    }
}

/// Which side of an exchange a limit amount is denominated in.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LimitKind {
    Source,
    Target,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Source => write!(f, "source"),
            LimitKind::Target => write!(f, "target"),
        }
    }
}

/// A validated instruction ready for processing by the exchange engine.
#[derive(Debug, Clone)]
pub enum Instruction {
    Open(OpenAccount),
    Rate(SetRate),
    Exchange(Exchange),
}

impl TryFrom<InstructionRecord> for Instruction {
    type Error = InstructionError;

    fn try_from(record: InstructionRecord) -> Result<Self, Self::Error> {
        match record.kind {
            InstructionKind::Open => Ok(Instruction::Open(OpenAccount::try_from(record)?)),
            InstructionKind::Rate => Ok(Instruction::Rate(SetRate::try_from(record)?)),
            InstructionKind::Exchange => Ok(Instruction::Exchange(Exchange::try_from(record)?)),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Open(open) => {
                write!(
                    f,
                    "[open] currency={} balance={}",
                    open.currency(),
                    open.balance()
                )
            }
            Instruction::Rate(rate) => {
                write!(
                    f,
                    "[rate] pair={}->{} value={}",
                    rate.source_currency(),
                    rate.target_currency(),
                    rate.value()
                )
            }
            Instruction::Exchange(exchange) => {
                write!(
                    f,
                    "[exchange] pair={}->{}",
                    exchange.source_currency(),
                    exchange.target_currency()
                )?;
                match exchange.limit() {
                    Limit::None => write!(f, " limit=none"),
                    Limit::Source(amount) => write!(f, " limit=source({amount})"),
                    Limit::Target(amount) => write!(f, " limit=target({amount})"),
                }
            }
        }
    }
}
