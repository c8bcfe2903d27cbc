//! A currency exchange engine built on exact decimal arithmetic.
//!
//! The core types are [`Money`], [`Calculator`], [`Account`] and
//! [`CurrencyExchanger`]: one exchange moves money between two
//! single-currency accounts at a fixed rate, bounded by an optional
//! [`Limit`], and never leaves the recipient with less target currency than
//! was asked for. [`ExchangeEngine`] wraps the core in a batch processor
//! that reads instructions from CSV and exports final balances as CSV.

mod engine;

pub use engine::{
    Account, Calculator, Currency, CurrencyExchanger, Error, Exchange, ExchangeEngine,
    ExchangeError, ExchangeRate, Instruction, InstructionError, InstructionKind,
    InstructionRecord, Limit, LimitKind, Money, OpenAccount, ProcessingError, SetRate,
};
pub use rust_decimal::RoundingStrategy;
