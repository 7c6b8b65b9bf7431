//! Holder balance accounting. The maps here are the trusted ledger; movements
//! reach `internal_deposit`/`internal_withdraw` only through the commit step
//! in `movement.rs`.

use near_sdk::json_types::U128;

use crate::*;

impl Contract {
    pub(crate) fn balance_key(holder: &AccountId, token_id: &str) -> String {
        format!("{}{}{}", holder, BALANCE_KEY_DELIMITER, token_id)
    }

    pub(crate) fn balance_of(&self, holder: &AccountId, token_id: &str) -> u128 {
        self.balances
            .get(&Self::balance_key(holder, token_id))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn internal_deposit(
        &mut self,
        holder: &AccountId,
        token_id: &str,
        amount: u128,
    ) -> Result<(), EmporiumError> {
        let key = Self::balance_key(holder, token_id);
        let balance = self.balances.get(&key).copied().unwrap_or(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(|| EmporiumError::InternalError("Balance overflow".into()))?;
        self.balances.insert(key, new_balance);
        Ok(())
    }

    pub(crate) fn internal_withdraw(
        &mut self,
        holder: &AccountId,
        token_id: &str,
        amount: u128,
    ) -> Result<(), EmporiumError> {
        let key = Self::balance_key(holder, token_id);
        let balance = self.balances.get(&key).copied().unwrap_or(0);
        let new_balance = balance.checked_sub(amount).ok_or_else(|| {
            EmporiumError::InsufficientBalance(format!(
                "{} holds {} of token {}, need {}",
                holder, balance, token_id, amount
            ))
        })?;
        if new_balance == 0 {
            self.balances.remove(&key);
        } else {
            self.balances.insert(key, new_balance);
        }
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn mt_balance_of(&self, account_id: AccountId, token_id: String) -> U128 {
        U128(self.balance_of(&account_id, &token_id))
    }

    /// Element-wise `mt_balance_of`; preserves input order.
    pub fn mt_batch_balance_of(&self, account_id: AccountId, token_ids: Vec<String>) -> Vec<U128> {
        token_ids
            .iter()
            .map(|token_id| U128(self.balance_of(&account_id, token_id)))
            .collect()
    }

    /// Current circulating supply of `token_id`.
    pub fn mt_supply(&self, token_id: String) -> U128 {
        U128(
            self.listings
                .get(&token_id)
                .map(|listing| listing.supply)
                .unwrap_or(0),
        )
    }
}
