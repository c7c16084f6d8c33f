//! Command-line configuration of the statement binary.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

use crate::account::Account;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    pub client_name: String,
    pub opening_balance: Decimal,
}

impl AccountConfig {
    fn parse(client_name: String, opening_balance: &str) -> Result<Self> {
        let opening_balance = opening_balance.parse::<Decimal>().with_context(|| {
            format!("Invalid opening balance `{opening_balance}` for `{client_name}`")
        })?;
        Ok(Self {
            client_name,
            opening_balance,
        })
    }

    pub fn open(&self) -> Result<Account> {
        Account::new(Some(self.client_name.as_str()), self.opening_balance)
            .with_context(|| format!("Failed to open account for `{}`", self.client_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub account: AccountConfig,
    pub counterparty: Option<AccountConfig>,
}

impl Config {
    pub const USAGE: &'static str = concat!(
        "<operations.csv> <client-name> <opening-balance> ",
        "[<counterparty-name> <counterparty-opening-balance>]"
    );

    /// Expects arguments without the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let input = args
            .next()
            .context("Expected a file name as the first argument")?;
        let client_name = args
            .next()
            .context("Expected a client name as the second argument")?;
        let opening_balance = args
            .next()
            .context("Expected an opening balance as the third argument")?;
        let account = AccountConfig::parse(client_name, &opening_balance)?;

        let counterparty = match (args.next(), args.next()) {
            (None, _) => None,
            (Some(name), Some(balance)) => Some(AccountConfig::parse(name, &balance)?),
            (Some(name), None) => bail!("Expected an opening balance for counterparty `{name}`"),
        };
        if let Some(extra) = args.next() {
            bail!("Unexpected argument `{extra}`");
        }

        Ok(Self {
            input: input.into(),
            account,
            counterparty,
        })
    }
}
