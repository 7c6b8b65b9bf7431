use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            paused: false,
            listings: IterableMap::new(StorageKey::Listings),
            balances: LookupMap::new(StorageKey::Balances),
            operators: LookupMap::new(StorageKey::Operators),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), EmporiumError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(EmporiumError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Halts purchases, transfers, and burns. Views stay available.
    #[payable]
    #[handle_result]
    pub fn pause(&mut self) -> Result<(), EmporiumError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.paused {
            return Err(EmporiumError::InvalidInput(
                "Contract is already paused".into(),
            ));
        }
        self.paused = true;
        events::emit_paused(&self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn resume(&mut self) -> Result<(), EmporiumError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if !self.paused {
            return Err(EmporiumError::InvalidInput(
                "Contract is not paused".into(),
            ));
        }
        self.paused = false;
        events::emit_resumed(&self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
