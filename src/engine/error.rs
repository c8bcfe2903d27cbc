use crate::engine::account::Currency;
use crate::engine::instruction::InstructionRecord;

/// Top-level error type for the exchange engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Instruction error: {0}")]
    Instruction(#[from] InstructionError),
    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),
}

/// Errors during `InstructionRecord` -> `Instruction` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum InstructionError {
    #[error("Invalid instruction: {0}")]
    InvalidInstruction(InstructionRecord),
}

/// The single error kind of the exchange core: a required numeric input was
/// absent or unusable. Propagates unchanged to the caller; never retried.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Soft errors during instruction processing.
/// These don't stop batch processing, we log and continue.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Account {currency} already open")]
    DuplicateAccount { currency: Currency },

    #[error("Account {currency} not found")]
    AccountNotFound { currency: Currency },

    #[error("No rate quoted for {source_currency}->{target_currency}")]
    RateNotFound {
        source_currency: Currency,
        target_currency: Currency,
    },

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}
