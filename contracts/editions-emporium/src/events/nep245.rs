use near_sdk::json_types::U128;

use super::builder::Nep245Event;

const VERSION: &str = "1.0.0";

pub fn emit_mint(owner_id: &str, token_ids: &[String], amounts: &[U128], memo: Option<&str>) {
    Nep245Event::new("mt_mint", VERSION)
        .field("owner_id", owner_id)
        .field("token_ids", token_ids)
        .field("amounts", amounts)
        .field_opt("memo", memo)
        .emit();
}

pub fn emit_transfer(
    old_owner_id: &str,
    new_owner_id: &str,
    token_ids: &[String],
    amounts: &[U128],
    authorized_id: Option<&str>,
    memo: Option<&str>,
) {
    Nep245Event::new("mt_transfer", VERSION)
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_ids", token_ids)
        .field("amounts", amounts)
        .field_opt("authorized_id", authorized_id)
        .field_opt("memo", memo)
        .emit();
}

pub fn emit_burn(
    owner_id: &str,
    token_ids: &[String],
    amounts: &[U128],
    authorized_id: Option<&str>,
    memo: Option<&str>,
) {
    Nep245Event::new("mt_burn", VERSION)
        .field("owner_id", owner_id)
        .field("token_ids", token_ids)
        .field("amounts", amounts)
        .field_opt("authorized_id", authorized_id)
        .field_opt("memo", memo)
        .emit();
}
