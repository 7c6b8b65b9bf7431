use near_sdk::json_types::U128;

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn mt_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        amount: U128,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.execute_transfer(
            &sender_id,
            sender_id.clone(),
            receiver_id,
            vec![token_id],
            vec![amount],
            memo,
        )
    }

    #[payable]
    #[handle_result]
    pub fn mt_batch_transfer(
        &mut self,
        receiver_id: AccountId,
        token_ids: Vec<String>,
        amounts: Vec<U128>,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.execute_transfer(
            &sender_id,
            sender_id.clone(),
            receiver_id,
            token_ids,
            amounts,
            memo,
        )
    }

    /// Transfer out of `owner_id`'s balance; caller must be an approved
    /// operator for `owner_id`.
    #[payable]
    #[handle_result]
    pub fn mt_transfer_from(
        &mut self,
        owner_id: AccountId,
        receiver_id: AccountId,
        token_id: String,
        amount: U128,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.execute_transfer(
            &sender_id,
            owner_id,
            receiver_id,
            vec![token_id],
            vec![amount],
            memo,
        )
    }

    #[payable]
    #[handle_result]
    pub fn mt_batch_transfer_from(
        &mut self,
        owner_id: AccountId,
        receiver_id: AccountId,
        token_ids: Vec<String>,
        amounts: Vec<U128>,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.execute_transfer(&sender_id, owner_id, receiver_id, token_ids, amounts, memo)
    }
}

impl Contract {
    pub(crate) fn execute_transfer(
        &mut self,
        actor_id: &AccountId,
        origin_id: AccountId,
        receiver_id: AccountId,
        token_ids: Vec<String>,
        amounts: Vec<U128>,
        memo: Option<String>,
    ) -> Result<(), EmporiumError> {
        self.check_active()?;

        if token_ids.len() != amounts.len() {
            return Err(EmporiumError::InvalidInput(
                "Token IDs and amounts must have the same length".into(),
            ));
        }
        if receiver_id == origin_id {
            return Err(EmporiumError::InvalidInput(
                "Receiver must differ from origin".into(),
            ));
        }
        if actor_id != &origin_id && !self.is_operator(&origin_id, actor_id) {
            return Err(EmporiumError::Unauthorized(
                "Sender is not an approved operator for origin".into(),
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

        let plan = self.validate_movement(
            MovementBatch {
                origin: Some(origin_id.clone()),
                entries,
            },
            false,
            0,
        )?;
        self.commit_movement(plan)?;

        let authorized_id = (actor_id != &origin_id).then(|| actor_id.as_str());
        events::nep245::emit_transfer(
            origin_id.as_str(),
            receiver_id.as_str(),
            &token_ids,
            &amounts,
            authorized_id,
            memo.as_deref(),
        );

        Ok(())
    }
}
