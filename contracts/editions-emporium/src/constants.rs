use near_sdk::NearToken;

pub const MAX_TOKEN_ID_LEN: usize = 256;

pub const MAX_BATCH_ENTRIES: usize = 20;

// Storage key invariant: delimiter cannot appear in NEAR account IDs, so a
// "{holder}:{token_id}" balance key splits unambiguously at the first ':'.
pub const BALANCE_KEY_DELIMITER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
