use std::io::Read;

use crate::command::Operation;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OperationRow {
    #[serde(rename = "type")]
    pub kind: Operation,
    /// Read from the raw text, so whole numbers wider than `u64` parse like any other amount.
    #[serde(default, deserialize_with = "rust_decimal::serde::str_option::deserialize")]
    pub amount: Option<Decimal>,
}

/// Parses operation list in CSV format.
///
/// Rows that cannot be deserialized are yielded as errors, so the caller
/// decides whether to skip them.
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, OperationRow>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, Result<OperationRow, csv::Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    #[test]
    fn parse_rows() {
        let input = "type, amount\ncredit, 10.5\ndebit,3\ntransfer\nrefund, 1\n";
        let rows: Vec<_> = CsvOperationParser::new(input.as_bytes()).collect();
        assert_eq!(rows.len(), 4);

        let (line, row) = &rows[0];
        let row = row.as_ref().unwrap();
        assert_eq!(*line, 2);
        assert_eq!(row.kind, Operation::Credit);
        assert_eq!(row.amount, Some(Decimal::new(105, 1)));

        let (_, row) = &rows[1];
        let row = row.as_ref().unwrap();
        assert_eq!(row.kind, Operation::Debit);
        assert_eq!(row.amount, Decimal::from_u32(3));

        // missing amount column is allowed
        let (_, row) = &rows[2];
        let row = row.as_ref().unwrap();
        assert_eq!(row.kind, Operation::Transfer);
        assert_eq!(row.amount, None);

        // unknown operation
        let (line, row) = &rows[3];
        assert_eq!(*line, 5);
        assert!(row.is_err());
    }

    #[test]
    fn parse_wide_amounts() {
        let input = concat!(
            "type,amount\n",
            "credit,50000000000000000000000000000\n",
            "credit,12.345\n",
            "debit,\n",
        );
        let rows: Vec<_> = CsvOperationParser::new(input.as_bytes())
            .map(|(_, row)| row.unwrap())
            .collect();
        let wide: Decimal = "50000000000000000000000000000".parse().unwrap();
        assert_eq!(rows[0].amount, Some(wide));
        assert_eq!(rows[1].amount, Some(Decimal::new(12345, 3)));
        // empty amount field
        assert_eq!(rows[2].amount, None);
    }
}
