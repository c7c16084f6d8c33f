use rust_decimal::Decimal;
use thiserror::Error;

pub use crate::account::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCommand {
    Credit(Decimal),
    Debit(Decimal),
    /// Moves funds from the statement account to its counterparty.
    Transfer(Decimal),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: Operation },
}

impl AccountCommand {
    /// Only the presence of the amount is checked here, its range is up to the account.
    pub fn parse_command(
        kind: Operation,
        amount: Option<Decimal>,
    ) -> Result<Self, AccountCommandError> {
        let Some(amount) = amount else {
            return Err(AccountCommandError::AmountRequired { kind });
        };
        Ok(match kind {
            Operation::Credit => Self::Credit(amount),
            Operation::Debit => Self::Debit(amount),
            Operation::Transfer => Self::Transfer(amount),
        })
    }
}
