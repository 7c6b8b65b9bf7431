//! Administrative listing writes.

use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// Creates or overwrites the listing for `token_id`. Owner only.
    /// `supply` is preserved across writes; lowering `supply_limit` below the
    /// current supply is rejected.
    #[payable]
    #[handle_result]
    pub fn set_listing(
        &mut self,
        token_id: String,
        purchasable: bool,
        transferable: bool,
        price: U128,
        supply_limit: U128,
        balance_limit: U128,
    ) -> Result<(), EmporiumError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;

        if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
            return Err(EmporiumError::InvalidInput(format!(
                "Token ID must be 1-{} bytes",
                MAX_TOKEN_ID_LEN
            )));
        }

        let supply = self
            .listings
            .get(&token_id)
            .map(|listing| listing.supply)
            .unwrap_or(0);

        if supply_limit.0 < supply {
            return Err(EmporiumError::InvalidLimit(format!(
                "Supply limit {} is below current supply {}",
                supply_limit.0, supply
            )));
        }

        let listing = Listing {
            purchasable,
            transferable,
            price: price.0,
            supply_limit: supply_limit.0,
            balance_limit: balance_limit.0,
            supply,
        };
        self.listings.insert(token_id.clone(), listing.clone());

        events::emit_listing_updated(&self.owner_id, &token_id, &listing);
        Ok(())
    }
}
