use serde::Deserialize;

/// Trustline row as fetched by the storage layer. Amounts are scaled by
/// [`crate::amount::ONE`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TrustlineRecord {
    pub account_id: String,
    pub asset_type: i32,
    pub asset_code: String,
    pub issuer: String,
    pub balance: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccountRecord {
    pub address: String,
}
