use serde::Serialize;

use crate::record::AccountRecord;

/// Account as exposed by the history endpoints. The address doubles as the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryAccount {
    pub id: String,
    pub account_id: String,
}

impl HistoryAccount {
    pub fn from_record(row: &AccountRecord) -> Self {
        Self {
            id: row.address.clone(),
            account_id: row.address.clone(),
        }
    }
}

impl From<&AccountRecord> for HistoryAccount {
    fn from(row: &AccountRecord) -> Self {
        Self::from_record(row)
    }
}
