use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::error::ExchangeError;
use super::money::Money;

/// A currency code, normalized to uppercase so that `eur` and `EUR` name the
/// same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Currency(String);

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency(code.trim().to_ascii_uppercase())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::from(code.to_owned())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialize Money rounded to whole cents with exactly 2 decimal places
fn serialize_money_2dp<S: Serializer>(value: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value.round_to_cents()))
}

/// An account holding a balance of money in a single currency.
///
/// The balance is mutated only through `withdraw` and `deposit`. The account
/// is a passive ledger: `withdraw` performs no insufficiency check, so the
/// caller clamps the amount to the available balance first (the exchanger
/// does exactly that).
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    currency: Currency,
    #[serde(serialize_with = "serialize_money_2dp")]
    balance: Money,
}

impl Account {
    pub fn new(currency: Currency, balance: Money) -> Self {
        Self { currency, balance }
    }

    /// Returns the account's currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deposit `amount` of money into the account.
    pub fn deposit(&mut self, amount: Option<Money>) -> Result<(), ExchangeError> {
        let amount = check_amount(amount)?;
        self.balance += amount;
        self.normalize();
        Ok(())
    }

    /// Withdraw `amount` of money from the account.
    pub fn withdraw(&mut self, amount: Option<Money>) -> Result<(), ExchangeError> {
        let amount = check_amount(amount)?;
        self.balance -= amount;
        self.normalize();
        Ok(())
    }

    /// Normalize the balance to trim trailing zeros.
    /// Keeps internal representation compact and consistent.
    fn normalize(&mut self) {
        self.balance = self.balance.normalize();
    }
}

fn check_amount(amount: Option<Money>) -> Result<Money, ExchangeError> {
    amount.ok_or(ExchangeError::InvalidArgument("amount of money is required"))
}
