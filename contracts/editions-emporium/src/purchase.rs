//! Mint-on-purchase entry points.

use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// Mints `amount` units of `token_id` to `receiver_id`. The attached
    /// deposit must equal `amount * price` exactly; under- and over-payment
    /// both reject. The contract owner pays nothing.
    #[payable]
    #[handle_result]
    pub fn purchase(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        amount: U128,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        self.execute_purchase(
            &buyer_id,
            receiver_id,
            vec![token_id],
            vec![amount],
            deposit,
            memo,
        )
    }

    /// Batch form of `purchase`: one deposit covering the sum over all
    /// entries. A failure on any entry rejects the whole batch.
    #[payable]
    #[handle_result]
    pub fn purchase_batch(
        &mut self,
        receiver_id: AccountId,
        token_ids: Vec<String>,
        amounts: Vec<U128>,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        self.execute_purchase(&buyer_id, receiver_id, token_ids, amounts, deposit, memo)
    }
}

impl Contract {
    pub(crate) fn execute_purchase(
        &mut self,
        buyer_id: &AccountId,
        receiver_id: AccountId,
        token_ids: Vec<String>,
        amounts: Vec<U128>,
        deposit: u128,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        self.check_active()?;

        if token_ids.len() != amounts.len() {
            return Err(EmporiumError::InvalidInput(
                "Token IDs and amounts must have the same length".into(),
            ));
        }

        let entries = token_ids
            .iter()
            .zip(&amounts)
            .map(|(token_id, amount)| MovementEntry {
                token_id: token_id.clone(),
                amount: amount.0,
                destination: receiver_id.clone(),
            })
            .collect();

        let privileged = self.is_privileged(buyer_id);
        let plan = self.validate_movement(
            MovementBatch {
                origin: None,
                entries,
            },
            privileged,
            deposit,
        )?;
        let total_price = plan.required_payment;
        self.commit_movement(plan)?;

        events::emit_purchase(
            buyer_id,
            &receiver_id,
            &token_ids,
            &amounts,
            total_price,
            memo.as_deref(),
        );
        Ok(())
    }
}
