use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;

mod listing;
mod movement;
mod purchase;
mod token;

mod admin;


pub use constants::*;
pub use errors::EmporiumError;
pub use listing::types::Listing;
pub(crate) use movement::{MovementBatch, MovementEntry};

#[derive(BorshStorageKey)]
#[near]
pub enum StorageKey {
    Listings,
    Balances,
    Operators,
    OperatorsInner { account_id_hash: Vec<u8> },
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/emporium-labs/emporium-protocol",
        standard(standard = "nep245", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub paused: bool,

    pub listings: IterableMap<String, Listing>,

    // Storage key invariant: balance keys are "{holder}:{token_id}"; the
    // delimiter cannot appear in NEAR account IDs, so keys cannot collide.
    pub(crate) balances: LookupMap<String, u128>,

    pub(crate) operators: LookupMap<AccountId, IterableSet<AccountId>>,
}
