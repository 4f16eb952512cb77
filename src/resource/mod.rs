use thiserror::Error;

use crate::asset::AssetError;

pub mod balance;
pub mod history_account;

pub use balance::{Balance, account_balances};
pub use history_account::HistoryAccount;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(transparent)]
    AssetErr(#[from] AssetError),
}
