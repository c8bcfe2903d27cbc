use std::collections::HashMap;
use std::io::{Read, Write};

use super::account::{Account, Currency};
use super::error::{Error, ProcessingError};
use super::exchanger::CurrencyExchanger;
use super::instruction::{Exchange, Instruction, InstructionRecord, OpenAccount, SetRate};
use super::rate::ExchangeRate;

/// The core exchange processing engine.
///
/// Processes instructions (account openings, rate quotes, exchanges) and
/// maintains the book of accounts and quoted rates across a batch.
#[derive(Debug, Default)]
pub struct ExchangeEngine {
    /// One account per currency
    accounts: HashMap<Currency, Account>,
    /// Latest quote per ordered currency pair
    rates: HashMap<(Currency, Currency), ExchangeRate>,
}

impl ExchangeEngine {
    /// Create a new `ExchangeEngine` with no accounts and no quotes
    pub fn new() -> Self {
        log::trace!("ExchangeEngine initialized");
        Self {
            accounts: HashMap::new(),
            rates: HashMap::new(),
        }
    }

    /// Primary API: Process instructions from any source (File, `TcpStream`, etc.)
    /// Note that the CSV reader is buffered automatically, so you should not wrap rdr in a buffered reader like `io::BufReader`.
    pub fn process_instructions<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        log::info!("Starting instruction processing");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All) // trim whitespace from fields
            .from_reader(reader);

        let mut processed = 0u64;
        let mut skipped = 0u64;

        for result in csv_reader.deserialize() {
            // Step 1: Parse CSV record into raw dirty InstructionRecord
            let record: InstructionRecord = result?;

            let row_num = processed + skipped + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            // Step 2: Convert raw dirty InstructionRecord into validated Instruction
            let instruction = Instruction::try_from(record)?;

            // Step 3: Process validated Instruction
            if let Err(e) = self.process_instruction(instruction) {
                log::warn!("[row {row_num}] - Skipped: {e}");
                skipped += 1;
            } else {
                processed += 1;
            }
        }

        log::info!(
            "Processing complete: {} processed, {} skipped, {} accounts",
            processed,
            skipped,
            self.accounts.len()
        );
        Ok(())
    }

    /// Secondary API: Write final balances to any sink (Stdout, File, `TcpStream`, etc.)
    /// Note that the CSV writer is buffered automatically, so you should not wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_balances<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.accounts.len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for account in self.accounts.values() {
            csv_writer.serialize(account)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    /// Returns the number of open accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn process_instruction(&mut self, instruction: Instruction) -> Result<(), ProcessingError> {
        log::trace!("Processing instruction: {instruction}");
        match instruction {
            Instruction::Open(open) => self.handle_open(open),
            Instruction::Rate(rate) => self.handle_rate(rate),
            Instruction::Exchange(exchange) => self.handle_exchange(exchange),
        }
    }
}

// =============================================================================
// Instruction Handlers
// =============================================================================

impl ExchangeEngine {
    fn handle_open(&mut self, open: OpenAccount) -> Result<(), ProcessingError> {
        let currency = open.currency().clone();
        let balance = open.balance();

        if self.accounts.contains_key(&currency) {
            return Err(ProcessingError::DuplicateAccount { currency });
        }

        let account = Account::new(currency.clone(), balance);
        self.accounts.insert(currency.clone(), account);

        log::debug!("[open] Opened {currency} account with balance {balance}");
        Ok(())
    }

    fn handle_rate(&mut self, rate: SetRate) -> Result<(), ProcessingError> {
        let quote = ExchangeRate::new(
            rate.source_currency().clone(),
            rate.target_currency().clone(),
            rate.value(),
        )?;
        let pair = (
            quote.source_currency().clone(),
            quote.target_currency().clone(),
        );

        // Re-quoting a pair replaces the earlier quote
        let replaced = self.rates.insert(pair, quote).is_some();

        log::debug!(
            "[rate] {}->{} quoted at {}{}",
            rate.source_currency(),
            rate.target_currency(),
            rate.value(),
            if replaced { " (requoted)" } else { "" }
        );
        Ok(())
    }

    fn handle_exchange(&mut self, exchange: Exchange) -> Result<(), ProcessingError> {
        let source_currency = exchange.source_currency().clone();
        let target_currency = exchange.target_currency().clone();

        let pair = (source_currency.clone(), target_currency.clone());
        let rate = self
            .rates
            .get(&pair)
            .ok_or_else(|| ProcessingError::RateNotFound {
                source_currency: source_currency.clone(),
                target_currency: target_currency.clone(),
            })?
            .value();

        // Instruction validation guarantees the two currencies differ, so the
        // disjoint lookup cannot be handed overlapping keys.
        let [source_account, target_account] = match self
            .accounts
            .get_disjoint_mut([&source_currency, &target_currency])
        {
            [Some(source), Some(target)] => [source, target],
            [None, _] => {
                return Err(ProcessingError::AccountNotFound {
                    currency: source_currency,
                })
            }
            [_, None] => {
                return Err(ProcessingError::AccountNotFound {
                    currency: target_currency,
                })
            }
        };

        CurrencyExchanger::new(source_account, target_account, rate).exchange(exchange.limit())?;

        log::trace!(
            "[exchange] {}={} {}={}",
            source_currency,
            source_account.balance(),
            target_currency,
            target_account.balance()
        );
        Ok(())
    }
}
