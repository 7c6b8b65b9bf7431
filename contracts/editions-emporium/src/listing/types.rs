//! Listing domain types.

use near_sdk::near;

/// Per-token-id sale configuration and inventory record. Created lazily on
/// the first `set_listing`; ids never written read as the zero-value default,
/// which disables both purchase and transfer.
#[near(serializers = [borsh, json])]
#[derive(Clone, Default)]
pub struct Listing {
    /// Gates whether new supply may be minted via purchase.
    pub purchasable: bool,
    /// Gates holder-to-holder movement; independent of `purchasable`.
    pub transferable: bool,
    /// yoctoNEAR per unit purchased. 0 = free.
    pub price: u128,
    /// Maximum units ever in circulation simultaneously.
    pub supply_limit: u128,
    /// Maximum units any single holder may hold at once.
    pub balance_limit: u128,
    /// Current circulating units. Mutated only by purchase commit and burn,
    /// never by `set_listing`.
    pub supply: u128,
}
