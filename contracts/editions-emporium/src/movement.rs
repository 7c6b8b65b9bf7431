//! Batch movement validation and commit.
//!
//! Every balance-changing entry point (purchase, transfer, and their batch
//! forms) funnels into one generalized pipeline: `validate_movement` decides,
//! `commit_movement` applies. Validation takes `&self` and cannot touch state,
//! so a rejection at any entry leaves no counter behind.

use std::collections::HashSet;

use crate::*;

/// One proposed balance movement: mint or deliver `amount` units of
/// `token_id` to `destination`.
#[derive(Debug)]
pub(crate) struct MovementEntry {
    pub token_id: String,
    pub amount: u128,
    pub destination: AccountId,
}

/// One call's worth of movements, validated and applied together.
/// `origin = None` mints new supply (purchase path); `origin = Some(holder)`
/// moves existing units out of that holder's balance (transfer path).
pub(crate) struct MovementBatch {
    pub origin: Option<AccountId>,
    pub entries: Vec<MovementEntry>,
}

/// Output of a successful validation pass; the only input `commit_movement`
/// accepts.
#[derive(Debug)]
pub(crate) struct CommitPlan {
    origin: Option<AccountId>,
    entries: Vec<MovementEntry>,
    /// Post-batch supply per purchased token id.
    supply_updates: Vec<(String, u128)>,
    pub(crate) required_payment: u128,
}

impl Contract {
    /// Runs the full pre-mutation check over `batch`. Any violated constraint
    /// rejects the entire batch; on success the returned plan carries the
    /// provisional supply counters and the exact payment owed.
    pub(crate) fn validate_movement(
        &self,
        batch: MovementBatch,
        privileged: bool,
        attached_payment: u128,
    ) -> Result<CommitPlan, EmporiumError> {
        let MovementBatch { origin, entries } = batch;

        if entries.is_empty() || entries.len() > MAX_BATCH_ENTRIES {
            return Err(EmporiumError::InvalidInput(format!(
                "Batch size must be 1-{}",
                MAX_BATCH_ENTRIES
            )));
        }

        // Balance-limit checks below read pre-batch balances; a repeated id
        // could split one over-limit amount into entries that pass
        // individually. No external entry point needs a repeated id.
        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.token_id.as_str()) {
                return Err(EmporiumError::duplicate_id(&entry.token_id));
            }
        }

        let mut required_payment: u128 = 0;
        let mut supply_updates = Vec::new();

        for entry in &entries {
            if entry.amount == 0 {
                return Err(EmporiumError::InvalidInput(format!(
                    "Amount for token {} must be positive",
                    entry.token_id
                )));
            }

            let listing = self
                .listings
                .get(&entry.token_id)
                .cloned()
                .unwrap_or_default();

            match origin {
                None => {
                    if !listing.purchasable {
                        return Err(EmporiumError::not_purchasable(&entry.token_id));
                    }
                    let new_supply = listing
                        .supply
                        .checked_add(entry.amount)
                        .filter(|supply| *supply <= listing.supply_limit)
                        .ok_or_else(|| {
                            EmporiumError::SupplyLimitExceeded(format!(
                                "Token {}: supply {} + {} exceeds limit {}",
                                entry.token_id, listing.supply, entry.amount, listing.supply_limit
                            ))
                        })?;
                    supply_updates.push((entry.token_id.clone(), new_supply));

                    let cost = entry.amount.checked_mul(listing.price).ok_or_else(|| {
                        EmporiumError::InternalError("Payment overflow".into())
                    })?;
                    required_payment = required_payment.checked_add(cost).ok_or_else(|| {
                        EmporiumError::InternalError("Payment overflow".into())
                    })?;
                }
                Some(_) => {
                    if !listing.transferable {
                        return Err(EmporiumError::not_transferable(&entry.token_id));
                    }
                }
            }

            let destination_balance = self.balance_of(&entry.destination, &entry.token_id);
            if destination_balance
                .checked_add(entry.amount)
                .filter(|balance| *balance <= listing.balance_limit)
                .is_none()
            {
                return Err(EmporiumError::BalanceLimitExceeded(format!(
                    "Token {}: balance {} + {} for {} exceeds limit {}",
                    entry.token_id,
                    destination_balance,
                    entry.amount,
                    entry.destination,
                    listing.balance_limit
                )));
            }
        }

        // The contract owner bypasses payment reconciliation only; every
        // capacity check above already ran.
        if !privileged && attached_payment != required_payment {
            return Err(EmporiumError::InvalidPayment(format!(
                "Required exactly {}, got {}",
                required_payment, attached_payment
            )));
        }

        Ok(CommitPlan {
            origin,
            entries,
            supply_updates,
            required_payment,
        })
    }

    /// Persists the plan's supply counters and applies its balance movements.
    /// Reachable only with a plan produced by `validate_movement`.
    pub(crate) fn commit_movement(&mut self, plan: CommitPlan) -> Result<(), EmporiumError> {
        for (token_id, new_supply) in &plan.supply_updates {
            let mut listing = self
                .listings
                .get(token_id)
                .cloned()
                .unwrap_or_default();
            listing.supply = *new_supply;
            self.listings.insert(token_id.clone(), listing);
        }

        for entry in &plan.entries {
            if let Some(origin) = &plan.origin {
                self.internal_withdraw(origin, &entry.token_id, entry.amount)?;
            }
            self.internal_deposit(&entry.destination, &entry.token_id, entry.amount)?;
        }

        Ok(())
    }
}
