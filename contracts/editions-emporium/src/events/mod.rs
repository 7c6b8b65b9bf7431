mod builder;
mod types;

mod contract;
mod listing;
pub(crate) mod nep245;
mod token;

pub use contract::*;
pub use listing::*;
pub use token::*;

pub(crate) const STANDARD: &str = "emporium";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
