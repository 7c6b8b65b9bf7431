use near_sdk::AccountId;

use super::LISTING;
use super::builder::EventBuilder;
use crate::Listing;

/// Emits the full post-write record, including current supply, for off-chain
/// observers.
pub fn emit_listing_updated(owner_id: &AccountId, token_id: &str, listing: &Listing) {
    EventBuilder::new(LISTING, "updated", owner_id)
        .field("token_id", token_id)
        .field("purchasable", listing.purchasable)
        .field("transferable", listing.transferable)
        .field("price", listing.price)
        .field("supply_limit", listing.supply_limit)
        .field("balance_limit", listing.balance_limit)
        .field("supply", listing.supply)
        .emit();
}
