use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), EmporiumError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(EmporiumError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), EmporiumError> {
        if actor_id != &self.owner_id {
            return Err(EmporiumError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_active(&self) -> Result<(), EmporiumError> {
        if self.paused {
            return Err(EmporiumError::paused());
        }
        Ok(())
    }

    pub(crate) fn is_privileged(&self, actor_id: &AccountId) -> bool {
        actor_id == &self.owner_id
    }
}
