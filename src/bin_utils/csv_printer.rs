use std::io::Write;

use anyhow::Context;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::Account;

#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub client: String,
    pub balance: Decimal,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            client: account.client_name().to_owned(),
            balance: account.balance(),
        }
    }
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in accounts {
        writer
            .serialize(&row)
            .with_context(|| format!("Failed to write balance of `{}` to CSV", row.client))?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::from_utf8;

    use super::*;

    #[test]
    fn print_balances() {
        let alice = Account::new(Some("Alice"), "12.50".parse().unwrap()).unwrap();
        let bob = Account::new(Some("Bob, Jr."), Decimal::ZERO).unwrap();
        let mut output = Vec::new();
        print_accounts(&mut output, [&alice, &bob].into_iter().map(AccountRow::from)).unwrap();
        assert_eq!(
            from_utf8(&output).unwrap(),
            "client,balance\nAlice,12.50\n\"Bob, Jr.\",0\n"
        );
    }
}
