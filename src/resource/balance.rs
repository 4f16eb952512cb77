use serde::Serialize;

use crate::{amount, asset::AssetType, record::TrustlineRecord};

use super::ProjectionError;

/// Balance held by an account, either native or through a trustline.
///
/// Native balances carry empty `asset_code`, `asset_issuer` and `limit`. Use
/// [`Balance::is_native`] to tell them apart from issued assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub asset_type: AssetType,
    pub asset_code: String,
    pub asset_issuer: String,
    pub balance: String,
    pub limit: String,
}

impl Balance {
    pub fn from_trustline(row: &TrustlineRecord) -> Result<Self, ProjectionError> {
        let asset_type = resolve(row.asset_type)?;
        if asset_type == AssetType::Native {
            // the ledger has no native trustlines, keep the native shape anyway
            return Self::native(row.balance);
        }
        Ok(Self {
            asset_type,
            asset_code: row.asset_code.clone(),
            asset_issuer: row.issuer.clone(),
            balance: amount::format(row.balance),
            limit: amount::format(row.limit),
        })
    }

    pub fn native(stroops: i64) -> Result<Self, ProjectionError> {
        let asset_type = resolve(AssetType::Native.discriminant())?;
        Ok(Self {
            asset_type,
            asset_code: String::new(),
            asset_issuer: String::new(),
            balance: amount::format(stroops),
            limit: String::new(),
        })
    }

    pub fn is_native(&self) -> bool {
        self.asset_type == AssetType::Native
    }
}

impl TryFrom<&TrustlineRecord> for Balance {
    type Error = ProjectionError;

    fn try_from(row: &TrustlineRecord) -> Result<Self, Self::Error> {
        Self::from_trustline(row)
    }
}

fn resolve(discriminant: i32) -> Result<AssetType, ProjectionError> {
    Ok(AssetType::try_from(discriminant)?)
}

/// All balances of one account: trustlines in the given order, native balance last.
pub fn account_balances<'a>(
    native_stroops: i64,
    trustlines: impl IntoIterator<Item = &'a TrustlineRecord>,
) -> Result<Vec<Balance>, ProjectionError> {
    let mut balances = trustlines
        .into_iter()
        .map(Balance::from_trustline)
        .collect::<Result<Vec<_>, _>>()?;
    balances.push(Balance::native(native_stroops)?);
    Ok(balances)
}
