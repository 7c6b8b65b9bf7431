use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::TOKEN;
use super::builder::EventBuilder;
use super::nep245;

pub fn emit_purchase(
    buyer_id: &AccountId,
    receiver_id: &AccountId,
    token_ids: &[String],
    amounts: &[U128],
    total_price: u128,
    memo: Option<&str>,
) {
    EventBuilder::new(TOKEN, "purchased", buyer_id)
        .field("buyer_id", buyer_id)
        .field("receiver_id", receiver_id)
        .field("token_ids", token_ids)
        .field("amounts", amounts)
        .field("total_price", total_price)
        .field_opt("memo", memo)
        .emit();
    nep245::emit_mint(receiver_id.as_str(), token_ids, amounts, None);
}

pub fn emit_operator_approved(owner_id: &AccountId, operator: &AccountId) {
    EventBuilder::new(TOKEN, "operator_approved", owner_id)
        .field("operator", operator)
        .emit();
}

pub fn emit_operator_revoked(owner_id: &AccountId, operator: &AccountId) {
    EventBuilder::new(TOKEN, "operator_revoked", owner_id)
        .field("operator", operator)
        .emit();
}
