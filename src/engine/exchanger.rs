use super::account::Account;
use super::calculator::Calculator;
use super::error::ExchangeError;
use super::money::Money;

/// Caller-specified bound on how much an exchange may move.
///
/// A closed set of variants so that an exchange is limited on exactly one
/// side, or not at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Limit {
    /// Exchange the full source balance.
    #[default]
    None,
    /// Spend this much source currency, clamped to the available balance.
    Source(Money),
    /// Obtain at least this much target currency.
    Target(Money),
}

/// Performs one exchange between a source and a target account at a fixed
/// rate.
///
/// The rate is fixed for the lifetime of the exchanger; build a new one to
/// change it. All amount computation happens before either balance is
/// touched, so a failed exchange leaves both accounts unchanged.
#[derive(Debug)]
pub struct CurrencyExchanger<'a> {
    source_account: &'a mut Account,
    target_account: &'a mut Account,
    rate: Money,
    calculator: Calculator,
}

impl<'a> CurrencyExchanger<'a> {
    /// Create an exchanger over the two accounts with its own default
    /// `Calculator`.
    pub fn new(
        source_account: &'a mut Account,
        target_account: &'a mut Account,
        rate: Money,
    ) -> Self {
        Self {
            source_account,
            target_account,
            rate,
            calculator: Calculator::new(),
        }
    }

    /// Replace the default calculator with an injected one.
    pub fn with_calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Move money from the source account to the target account, converting
    /// at the exchanger's rate and honoring `limit`.
    ///
    /// The amount requested by the limit is clamped to the source balance,
    /// so a partial exchange never overdraws the source account.
    pub fn exchange(&mut self, limit: Limit) -> Result<(), ExchangeError> {
        let requested = self.requested_source_amount(limit)?;
        let source_amount = requested.min(self.source_account.balance());
        let target_amount = self
            .calculator
            .compute_target_amount(Some(source_amount), Some(self.rate))?;

        self.source_account.withdraw(Some(source_amount))?;
        self.target_account.deposit(Some(target_amount))?;
        Ok(())
    }

    fn requested_source_amount(&self, limit: Limit) -> Result<Money, ExchangeError> {
        match limit {
            Limit::None => Ok(self.source_account.balance()),
            Limit::Source(amount) => Ok(amount),
            Limit::Target(amount) => self
                .calculator
                .compute_source_amount(Some(amount), Some(self.rate)),
        }
    }
}
