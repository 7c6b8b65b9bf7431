use near_sdk::json_types::U128;

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Burns `amount` units of `token_id` from the caller's balance and
    /// releases them from circulation. No listing flag gates a holder burning
    /// their own units.
    #[payable]
    #[handle_result]
    pub fn burn(
        &mut self,
        token_id: String,
        amount: U128,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        self.check_active()?;

        if amount.0 == 0 {
            return Err(EmporiumError::InvalidInput(
                "Amount must be positive".into(),
            ));
        }

        let holder_id = env::predecessor_account_id();
        self.internal_withdraw(&holder_id, &token_id, amount.0)?;

        // Supply invariant: every unit held was minted through a purchase
        // commit, so circulating supply covers any withdrawable balance.
        let mut listing = self.listings.get(&token_id).cloned().unwrap_or_default();
        listing.supply = listing
            .supply
            .checked_sub(amount.0)
            .ok_or_else(|| EmporiumError::InternalError("Supply underflow".into()))?;
        self.listings.insert(token_id.clone(), listing);

        events::nep245::emit_burn(
            holder_id.as_str(),
            &[token_id],
            &[amount],
            None,
            memo.as_deref(),
        );
        Ok(())
    }
}
