use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("Unknown asset type discriminant {0}")]
    UnknownAssetType(i32),
    #[error("Unknown asset type `{0}`")]
    UnknownAssetTag(String),
}

/// Asset classes known to the ledger. Discriminants match the XDR numbering
/// used by storage rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Native = 0,
    CreditAlphanum4 = 1,
    CreditAlphanum12 = 2,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [
        AssetType::Native,
        AssetType::CreditAlphanum4,
        AssetType::CreditAlphanum12,
    ];

    /// Public tag of the asset class. API consumers match on these exact strings.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Native => "native",
            AssetType::CreditAlphanum4 => "credit_alphanum4",
            AssetType::CreditAlphanum12 => "credit_alphanum12",
        }
    }

    pub fn discriminant(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for AssetType {
    type Error = AssetError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AssetType::Native),
            1 => Ok(AssetType::CreditAlphanum4),
            2 => Ok(AssetType::CreditAlphanum12),
            other => Err(AssetError::UnknownAssetType(other)),
        }
    }
}

impl FromStr for AssetType {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| AssetError::UnknownAssetTag(s.to_owned()))
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AssetType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
