use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

use crate::record::TrustlineRecord;

/// Storage row of a balance dump. Native rows leave `limit` empty.
#[derive(Debug, Deserialize)]
pub struct StorageRow {
    pub account: String,
    pub asset_type: i32,
    pub asset_code: String,
    pub issuer: String,
    pub balance: i64,
    pub limit: Option<i64>,
}

impl StorageRow {
    pub fn into_trustline(self, limit: i64) -> TrustlineRecord {
        TrustlineRecord {
            account_id: self.account,
            asset_type: self.asset_type,
            asset_code: self.asset_code,
            issuer: self.issuer,
            balance: self.balance,
            limit,
        }
    }
}

/// Parses storage rows in CSV format, yielding each row with its line number.
pub struct CsvRowParser<R> {
    iter: DeserializeRecordsIntoIter<R, StorageRow>,
}

impl<R> CsvRowParser<R>
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

impl<R> Iterator for CsvRowParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<StorageRow>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
