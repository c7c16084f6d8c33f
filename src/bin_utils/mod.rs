//! This module could be a separate crate on its own, to bootstrap [`bank_account`](crate) within
//! the binary, but the integration tests drive it directly so it lives here.

use std::io::{Read, Write};

use crate::processor::{
    OperationProcessError, OperationProcessor, statement_processor::StatementProcessor,
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountRow, print_accounts};
use thiserror::Error;
pub mod config;
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Parse(#[from] csv::Error),
    #[error(transparent)]
    Process(#[from] OperationProcessError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub processor: StatementProcessor,
    pub error_printer: Box<dyn FnMut(u64, RowError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        for (line, row) in parser {
            let outcome = row
                .map_err(RowError::from)
                .and_then(|row| {
                    self.processor
                        .process_operation(row.kind, row.amount)
                        .map_err(RowError::from)
                });
            if let Err(err) = outcome {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(self.output, self.processor.accounts().map(AccountRow::from))
    }
}
