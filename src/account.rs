use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

/// Balance mutation, as named in the `type` column of an operation row.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Credit,
    Debit,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingArgument {
    #[error("Client name must not be empty")]
    ClientName,
    #[error("Destination account is required")]
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeViolation {
    #[error("Initial balance {balance} must not be negative")]
    NegativeInitialBalance { balance: Decimal },
    #[error("{operation:?} amount {amount} must be greater than zero")]
    NonPositiveAmount { operation: Operation, amount: Decimal },
    #[error("{operation:?} amount {amount} exceeds balance {balance}")]
    InsufficientFunds {
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
    },
    #[error("{operation:?} amount {amount} overflows balance {balance}")]
    Overflow {
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] MissingArgument),
    #[error("Out of range: {0}")]
    OutOfRange(#[from] RangeViolation),
}

/// Single client account. The balance never drops below zero and every
/// rejected call leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    client_name: String,
    balance: Decimal,
}

impl Account {
    /// `None`, empty and whitespace-only names are rejected before the balance is looked at.
    pub fn new(client_name: Option<&str>, initial_balance: Decimal) -> Result<Self, AccountError> {
        let Some(client_name) = client_name.filter(|name| !name.trim().is_empty()) else {
            return Err(MissingArgument::ClientName.into());
        };
        if initial_balance < Decimal::zero() {
            return Err(RangeViolation::NegativeInitialBalance {
                balance: initial_balance,
            }
            .into());
        }
        Ok(Self {
            client_name: client_name.to_owned(),
            balance: initial_balance,
        })
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn credit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_positive(Operation::Credit, amount)?;
        self.balance = self.credited(Operation::Credit, amount)?;
        tracing::debug!(client = %self.client_name, %amount, balance = %self.balance, "credited");
        Ok(())
    }

    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_positive(Operation::Debit, amount)?;
        self.check_covered(Operation::Debit, amount)?;
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(RangeViolation::Overflow {
                operation: Operation::Debit,
                amount,
                balance: self.balance,
            })?;
        tracing::debug!(client = %self.client_name, %amount, balance = %self.balance, "debited");
        Ok(())
    }

    /// Debits `amount` here, then credits it to `destination`.
    ///
    /// Everything that could make either step fail is checked up front, so
    /// the pair either fully happens or not at all.
    pub fn transfer(
        &mut self,
        amount: Decimal,
        destination: Option<&mut Account>,
    ) -> Result<(), AccountError> {
        let Some(destination) = destination else {
            tracing::debug!(client = %self.client_name, %amount, "transfer without destination");
            return Err(MissingArgument::Destination.into());
        };
        self.check_positive(Operation::Transfer, amount)?;
        self.check_covered(Operation::Transfer, amount)?;
        destination.credited(Operation::Transfer, amount)?;

        self.debit(amount)?;
        destination.credit(amount)?;
        tracing::debug!(
            from = %self.client_name,
            to = %destination.client_name,
            %amount,
            "transferred"
        );
        Ok(())
    }

    fn check_positive(&self, operation: Operation, amount: Decimal) -> Result<(), RangeViolation> {
        if amount <= Decimal::zero() {
            tracing::debug!(client = %self.client_name, ?operation, %amount, "non-positive amount");
            return Err(RangeViolation::NonPositiveAmount { operation, amount });
        }
        Ok(())
    }

    /// Balance after receiving `amount`, without touching the account.
    fn credited(&self, operation: Operation, amount: Decimal) -> Result<Decimal, RangeViolation> {
        self.balance.checked_add(amount).ok_or_else(|| {
            tracing::debug!(
                client = %self.client_name,
                ?operation,
                %amount,
                balance = %self.balance,
                "balance overflow"
            );
            RangeViolation::Overflow {
                operation,
                amount,
                balance: self.balance,
            }
        })
    }

    fn check_covered(&self, operation: Operation, amount: Decimal) -> Result<(), RangeViolation> {
        if amount > self.balance {
            tracing::debug!(
                client = %self.client_name,
                ?operation,
                %amount,
                balance = %self.balance,
                "insufficient funds"
            );
            return Err(RangeViolation::InsufficientFunds {
                operation,
                amount,
                balance: self.balance,
            });
        }
        Ok(())
    }
}
