use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountError,
    command::{AccountCommandError, Operation},
};

pub mod statement_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait OperationProcessor {
    fn process_operation(
        &mut self,
        kind: Operation,
        amount: Option<Decimal>,
    ) -> Result<(), OperationProcessError>;
}
