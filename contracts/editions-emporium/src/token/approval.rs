//! Operator approvals: blanket transfer rights over a holder's balances.

use near_sdk::store::IterableSet;

use crate::guards::{check_one_yocto, hash_account_id};
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn approve_operator(&mut self, operator: AccountId) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        if operator == owner_id {
            return Err(EmporiumError::InvalidInput(
                "Operator must differ from owner".into(),
            ));
        }

        if !self.operators.contains_key(&owner_id) {
            self.operators.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::OperatorsInner {
                    account_id_hash: hash_account_id(&owner_id),
                }),
            );
        }
        self.operators
            .get_mut(&owner_id)
            .unwrap()
            .insert(operator.clone());

        events::emit_operator_approved(&owner_id, &operator);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn revoke_operator(&mut self, operator: AccountId) -> Result<(), EmporiumError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let mut removed = false;
        if let Some(operators) = self.operators.get_mut(&owner_id) {
            removed = operators.remove(&operator);
            if operators.is_empty() {
                self.operators.remove(&owner_id);
            }
        }
        if !removed {
            return Err(EmporiumError::InvalidInput(
                "Operator is not approved".into(),
            ));
        }

        events::emit_operator_revoked(&owner_id, &operator);
        Ok(())
    }

    pub fn is_approved_operator(&self, owner_id: AccountId, operator: AccountId) -> bool {
        self.is_operator(&owner_id, &operator)
    }
}

impl Contract {
    pub(crate) fn is_operator(&self, owner_id: &AccountId, operator: &AccountId) -> bool {
        self.operators
            .get(owner_id)
            .is_some_and(|operators| operators.contains(operator))
    }
}
