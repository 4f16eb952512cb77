//! Bootstraps [`crate::resource`] over a CSV dump of storage rows, standing in
//! for the storage layer. Kept in the library so the integration test can drive it.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use csv_parser::{CsvRowParser, StorageRow};
use csv_printer::print_balances;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    amount,
    asset::AssetType,
    resource::{Balance, ProjectionError},
};

pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ProjectionError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvRowParser::new(self.input);

        let mut balances = Vec::new();
        let mut rejected = 0usize;
        let mut native_total = Decimal::ZERO;

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed row at line {line}"))?;
            let account = row.account.clone();
            let stroops = row.balance;
            match project_row(line, row)? {
                Ok(balance) => {
                    debug!(line, %account, asset_type = %balance.asset_type, "projected balance");
                    if balance.is_native() {
                        native_total += amount::to_decimal(stroops);
                    }
                    balances.push((account, balance));
                }
                Err(err) => {
                    warn!(line, %account, %err, "rejected balance row");
                    rejected += 1;
                    (self.error_printer)(line, err);
                }
            }
        }
        info!(
            projected = balances.len(),
            rejected,
            %native_total,
            "balance dump processed"
        );

        print_balances(self.output, balances)
    }
}

/// Outer error aborts the run, inner error rejects only this row.
fn project_row(line: u64, row: StorageRow) -> Result<Result<Balance, ProjectionError>> {
    let asset_type = match AssetType::try_from(row.asset_type) {
        Ok(asset_type) => asset_type,
        Err(err) => return Ok(Err(err.into())),
    };
    if asset_type == AssetType::Native {
        return Ok(Balance::native(row.balance));
    }
    let limit = row
        .limit
        .with_context(|| format!("Missing limit for issued asset at line {line}"))?;
    Ok(Balance::from_trustline(&row.into_trustline(limit)))
}

#[cfg(test)]
mod tests {
    use crate::asset::AssetError;

    use super::*;

    fn row(asset_type: i32, limit: Option<i64>) -> StorageRow {
        StorageRow {
            account: "GA".to_owned(),
            asset_type,
            asset_code: "USD".to_owned(),
            issuer: "GI".to_owned(),
            balance: 10,
            limit,
        }
    }

    #[test]
    fn unknown_asset_type_is_rejected_before_limit_check() {
        let result = project_row(2, row(9, None)).unwrap();
        assert_eq!(
            result.unwrap_err(),
            ProjectionError::AssetErr(AssetError::UnknownAssetType(9))
        );
    }

    #[test]
    fn native_row_ignores_limit() {
        let balance = project_row(2, row(0, Some(5))).unwrap().unwrap();
        assert_eq!(balance, Balance::native(10).unwrap());
    }

    #[test]
    fn issued_row_requires_limit() {
        let err = project_row(4, row(1, None)).unwrap_err();
        assert_eq!(err.to_string(), "Missing limit for issued asset at line 4");

        let balance = project_row(4, row(1, Some(20))).unwrap().unwrap();
        assert_eq!(balance.limit, "0.0000020");
    }
}
