use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;

use crate::{asset::AssetType, resource::Balance};

#[derive(Debug, Serialize)]
struct BalanceRow {
    account: String,
    asset_type: AssetType,
    asset_code: String,
    asset_issuer: String,
    balance: String,
    limit: String,
}

impl BalanceRow {
    fn new(account: String, balance: Balance) -> Self {
        Self {
            account,
            asset_type: balance.asset_type,
            asset_code: balance.asset_code,
            asset_issuer: balance.asset_issuer,
            balance: balance.balance,
            limit: balance.limit,
        }
    }
}

/// Writes one CSV row per `(account, balance)` pair, in the given order.
pub fn print_balances<W>(
    output: &mut W,
    balances: impl IntoIterator<Item = (String, Balance)>,
) -> Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for (row_no, (account, balance)) in balances.into_iter().enumerate() {
        writer
            .serialize(BalanceRow::new(account, balance))
            .with_context(|| format!("Failed to write balance #{row_no} to CSV"))?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
