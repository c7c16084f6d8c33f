use rust_decimal::Decimal;

use crate::{
    account::Account,
    command::{AccountCommand, Operation},
};

use super::{OperationProcessError, OperationProcessor};

/// Replays operations against one account. Transfers go to the counterparty,
/// and are rejected when there is none.
#[derive(Debug)]
pub struct StatementProcessor {
    pub account: Account,
    pub counterparty: Option<Account>,
}

impl StatementProcessor {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            counterparty: None,
        }
    }

    pub fn with_counterparty(account: Account, counterparty: Account) -> Self {
        Self {
            account,
            counterparty: Some(counterparty),
        }
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        std::iter::once(&self.account).chain(self.counterparty.as_ref())
    }
}

impl OperationProcessor for StatementProcessor {
    fn process_operation(
        &mut self,
        kind: Operation,
        amount: Option<Decimal>,
    ) -> Result<(), OperationProcessError> {
        match AccountCommand::parse_command(kind, amount)? {
            AccountCommand::Credit(amount) => self.account.credit(amount)?,
            AccountCommand::Debit(amount) => self.account.debit(amount)?,
            AccountCommand::Transfer(amount) => self
                .account
                .transfer(amount, self.counterparty.as_mut())?,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::{FromPrimitive, Zero};

    use crate::{
        account::{AccountError, MissingArgument, RangeViolation},
        command::AccountCommandError,
    };

    use super::*;

    fn account(name: &str, balance: u32) -> Account {
        Account::new(Some(name), Decimal::from_u32(balance).unwrap()).unwrap()
    }

    #[test]
    fn process_some_operations() {
        let mut processor =
            StatementProcessor::with_counterparty(account("Alice", 1000), account("Bob", 0));
        processor
            .process_operation(Operation::Credit, Some(Decimal::from_u32(500).unwrap()))
            .unwrap();
        processor
            .process_operation(Operation::Debit, Some(Decimal::from_u32(200).unwrap()))
            .unwrap();
        processor
            .process_operation(Operation::Transfer, Some(Decimal::from_u32(300).unwrap()))
            .unwrap();

        assert_eq!(processor.account.balance(), Decimal::from_u32(1000).unwrap());
        let bob = processor.counterparty.as_ref().unwrap();
        assert_eq!(bob.balance(), Decimal::from_u32(300).unwrap());
        assert_eq!(processor.accounts().count(), 2);

        let err = processor
            .process_operation(Operation::Credit, None)
            .unwrap_err();
        assert_eq!(
            err,
            OperationProcessError::CommandErr(AccountCommandError::AmountRequired {
                kind: Operation::Credit
            })
        );

        let err = processor
            .process_operation(Operation::Debit, Some(Decimal::from_u32(5000).unwrap()))
            .unwrap_err();
        assert!(matches!(
            err,
            OperationProcessError::AccountErr(AccountError::OutOfRange(
                RangeViolation::InsufficientFunds { .. }
            ))
        ));
        assert_eq!(processor.account.balance(), Decimal::from_u32(1000).unwrap());
    }

    #[test]
    fn transfer_without_counterparty() {
        let mut processor = StatementProcessor::new(account("Alice", 100));
        assert_eq!(processor.accounts().count(), 1);

        let err = processor
            .process_operation(Operation::Transfer, Some(Decimal::from_u32(10).unwrap()))
            .unwrap_err();
        assert_eq!(
            err,
            OperationProcessError::AccountErr(AccountError::InvalidArgument(
                MissingArgument::Destination
            ))
        );
        assert_eq!(processor.account.balance(), Decimal::from_u32(100).unwrap());

        processor
            .process_operation(Operation::Debit, Some(Decimal::from_u32(100).unwrap()))
            .unwrap();
        assert_eq!(processor.account.balance(), Decimal::zero());
    }
}
