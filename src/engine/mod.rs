//! Exchange engine module.
//!
//! This module contains the core currency exchange logic including:
//! - `ExchangeEngine` - The batch instruction processor
//! - `CurrencyExchanger` - A single exchange between two accounts
//! - `Calculator` - Conversion and rounding arithmetic
//! - `Money`, `Account`, `ExchangeRate` - The value types
//! - `Error` types - Processing and validation errors

mod account;
mod calculator;
mod error;
mod exchange_engine;
mod exchanger;
mod instruction;
mod money;
mod rate;

pub(crate) use rust_decimal::Decimal;

pub use account::{Account, Currency};
pub use calculator::Calculator;
pub use error::{Error, ExchangeError, InstructionError, ProcessingError};
pub use exchange_engine::ExchangeEngine;
pub use exchanger::{CurrencyExchanger, Limit};
pub use instruction::{
    Exchange, Instruction, InstructionKind, InstructionRecord, LimitKind, OpenAccount, SetRate,
};
pub use money::Money;
pub use rate::ExchangeRate;
