/// Asset classes of the ledger and their public tags.
pub mod asset;

/// Fixed-point amount formatting and parsing, 10^7 stroops per unit.
pub mod amount;

/// Rows as handed over by the storage layer.
pub mod record;

/// Projection of storage rows into API resources.
///
/// Every resource is built fully populated or not at all, so there is no
/// partially filled value to observe after an error.
pub mod resource;

/// Reads a CSV balance dump and prints projected balances. Lives in the
/// library so it can be used from the integration test.
pub mod bin_utils;
