use crate::*;

#[near]
impl Contract {
    /// Returns the listing for `token_id`, or the zero-value default if it
    /// was never set.
    pub fn get_listing(&self, token_id: String) -> Listing {
        self.listings.get(&token_id).cloned().unwrap_or_default()
    }

    /// Element-wise `get_listing`; preserves input order, no deduplication.
    pub fn get_listing_batch(&self, token_ids: Vec<String>) -> Vec<Listing> {
        token_ids
            .iter()
            .map(|token_id| self.listings.get(token_id).cloned().unwrap_or_default())
            .collect()
    }
}
