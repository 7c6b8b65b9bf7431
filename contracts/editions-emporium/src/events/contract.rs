use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_paused(owner_id: &AccountId) {
    EventBuilder::new(CONTRACT, "paused", owner_id).emit();
}

pub fn emit_resumed(owner_id: &AccountId) {
    EventBuilder::new(CONTRACT, "resumed", owner_id).emit();
}
