//! Integration tests for the editions-emporium contract.
//!
//! Covers the externally-observable surface end to end:
//! - Deployment and initialization
//! - Listing administration (set_listing, get_listing, get_listing_batch)
//! - Mint-on-purchase with exact payment accounting
//! - Transfers and batch atomicity
//! - Pause/resume gating

use anyhow::Result;
use near_workspaces::Account;
use near_workspaces::types::NearToken;
use serde_json::json;

use crate::utils::{deploy_contract, get_wasm_path, setup_sandbox};

// =============================================================================
// Setup helpers
// =============================================================================

async fn setup_emporium() -> Result<(
    near_workspaces::Worker<near_workspaces::network::Sandbox>,
    near_workspaces::Contract,
)> {
    let worker = setup_sandbox().await?;
    let wasm_path = get_wasm_path("editions_emporium");
    let contract = deploy_contract(&worker, &wasm_path).await?;

    contract
        .call("new")
        .args_json(json!({ "owner_id": contract.id() }))
        .transact()
        .await?
        .into_result()?;

    Ok((worker, contract))
}

/// Write a listing as the contract owner.
async fn set_listing(
    contract: &near_workspaces::Contract,
    token_id: &str,
    purchasable: bool,
    transferable: bool,
    price: u128,
    supply_limit: u128,
    balance_limit: u128,
) -> Result<()> {
    contract
        .call("set_listing")
        .args_json(json!({
            "token_id": token_id,
            "purchasable": purchasable,
            "transferable": transferable,
            "price": price.to_string(),
            "supply_limit": supply_limit.to_string(),
            "balance_limit": balance_limit.to_string(),
        }))
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?
        .into_result()?;
    Ok(())
}

async fn balance_of(
    contract: &near_workspaces::Contract,
    account: &Account,
    token_id: &str,
) -> Result<u128> {
    let balance: String = contract
        .view("mt_balance_of")
        .args_json(json!({ "account_id": account.id(), "token_id": token_id }))
        .await?
        .json()?;
    Ok(balance.parse()?)
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[tokio::test]
async fn test_deploy_and_init() -> Result<()> {
    let (_worker, contract) = setup_emporium().await?;

    let owner: String = contract.view("get_owner").args_json(json!({})).await?.json()?;
    assert_eq!(owner, contract.id().to_string());

    let paused: bool = contract.view("is_paused").args_json(json!({})).await?.json()?;
    assert!(!paused);

    Ok(())
}

// =============================================================================
// Listing Administration Tests
// =============================================================================

#[tokio::test]
async fn test_set_and_get_listing() -> Result<()> {
    let (_worker, contract) = setup_emporium().await?;

    set_listing(&contract, "sword", true, false, 5, 100, 10).await?;

    let listing: serde_json::Value = contract
        .view("get_listing")
        .args_json(json!({ "token_id": "sword" }))
        .await?
        .json()?;
    assert_eq!(listing["purchasable"], true);
    assert_eq!(listing["transferable"], false);
    assert_eq!(listing["price"], 5);
    assert_eq!(listing["supply_limit"], 100);
    assert_eq!(listing["supply"], 0);

    // Unset ids read as the zero-value default.
    let listings: serde_json::Value = contract
        .view("get_listing_batch")
        .args_json(json!({ "token_ids": ["never-set", "sword"] }))
        .await?
        .json()?;
    assert_eq!(listings[0]["purchasable"], false);
    assert_eq!(listings[1]["price"], 5);

    Ok(())
}

#[tokio::test]
async fn test_set_listing_requires_owner() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let mallory = worker.dev_create_account().await?;

    let res = mallory
        .call(contract.id(), "set_listing")
        .args_json(json!({
            "token_id": "sword",
            "purchasable": true,
            "transferable": true,
            "price": "5",
            "supply_limit": "100",
            "balance_limit": "10",
        }))
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?;
    assert!(res.is_failure());

    Ok(())
}

// =============================================================================
// Purchase Tests
// =============================================================================

#[tokio::test]
async fn test_purchase_happy_path() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 5, 2, 4).await?;

    buyer
        .call(contract.id(), "purchase")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_id": "sword",
            "amount": "2",
        }))
        .deposit(NearToken::from_yoctonear(10))
        .transact()
        .await?
        .into_result()?;

    assert_eq!(balance_of(&contract, &buyer, "sword").await?, 2);

    let supply: String = contract
        .view("mt_supply")
        .args_json(json!({ "token_id": "sword" }))
        .await?
        .json()?;
    assert_eq!(supply, "2");

    Ok(())
}

#[tokio::test]
async fn test_purchase_requires_exact_payment() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 5, 100, 10).await?;

    // Off by one in either direction rejects.
    for deposit in [9u128, 11] {
        let res = buyer
            .call(contract.id(), "purchase")
            .args_json(json!({
                "receiver_id": buyer.id(),
                "token_id": "sword",
                "amount": "2",
            }))
            .deposit(NearToken::from_yoctonear(deposit))
            .transact()
            .await?;
        assert!(res.is_failure(), "deposit {} must reject", deposit);
    }

    assert_eq!(balance_of(&contract, &buyer, "sword").await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_purchase_batch_is_atomic() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 1, 999, 1000).await?;
    set_listing(&contract, "shield", true, true, 1, 999, 1000).await?;

    // Second entry overshoots its supply cap; nothing may land.
    let res = buyer
        .call(contract.id(), "purchase_batch")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_ids": ["sword", "shield"],
            "amounts": ["999", "1000"],
        }))
        .deposit(NearToken::from_yoctonear(1999))
        .transact()
        .await?;
    assert!(res.is_failure());

    let supply: String = contract
        .view("mt_supply")
        .args_json(json!({ "token_id": "sword" }))
        .await?
        .json()?;
    assert_eq!(supply, "0");

    Ok(())
}

#[tokio::test]
async fn test_purchase_batch_rejects_duplicate_ids() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 0, 100, 10).await?;

    let res = buyer
        .call(contract.id(), "purchase_batch")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_ids": ["sword", "sword"],
            "amounts": ["6", "6"],
        }))
        .transact()
        .await?;
    assert!(res.is_failure());

    assert_eq!(balance_of(&contract, &buyer, "sword").await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_owner_purchase_without_payment() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let receiver = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 5, 100, 10).await?;

    contract
        .call("purchase")
        .args_json(json!({
            "receiver_id": receiver.id(),
            "token_id": "sword",
            "amount": "3",
        }))
        .transact()
        .await?
        .into_result()?;

    assert_eq!(balance_of(&contract, &receiver, "sword").await?, 3);

    Ok(())
}

// =============================================================================
// Transfer Tests
// =============================================================================

#[tokio::test]
async fn test_transfer_happy_path() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;
    let receiver = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 0, 100, 10).await?;

    buyer
        .call(contract.id(), "purchase")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_id": "sword",
            "amount": "5",
        }))
        .transact()
        .await?
        .into_result()?;

    buyer
        .call(contract.id(), "mt_transfer")
        .args_json(json!({
            "receiver_id": receiver.id(),
            "token_id": "sword",
            "amount": "2",
        }))
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?
        .into_result()?;

    assert_eq!(balance_of(&contract, &buyer, "sword").await?, 3);
    assert_eq!(balance_of(&contract, &receiver, "sword").await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_transfer_blocked_by_flag() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;
    let receiver = worker.dev_create_account().await?;

    set_listing(&contract, "badge", true, false, 0, 100, 10).await?;

    buyer
        .call(contract.id(), "purchase")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_id": "badge",
            "amount": "5",
        }))
        .transact()
        .await?
        .into_result()?;

    let res = buyer
        .call(contract.id(), "mt_transfer")
        .args_json(json!({
            "receiver_id": receiver.id(),
            "token_id": "badge",
            "amount": "1",
        }))
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?;
    assert!(res.is_failure());

    Ok(())
}

// =============================================================================
// Pause Tests
// =============================================================================

#[tokio::test]
async fn test_pause_blocks_purchases() -> Result<()> {
    let (worker, contract) = setup_emporium().await?;
    let buyer = worker.dev_create_account().await?;

    set_listing(&contract, "sword", true, true, 0, 100, 10).await?;

    contract
        .call("pause")
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?
        .into_result()?;

    let res = buyer
        .call(contract.id(), "purchase")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_id": "sword",
            "amount": "1",
        }))
        .transact()
        .await?;
    assert!(res.is_failure());

    contract
        .call("resume")
        .deposit(NearToken::from_yoctonear(1))
        .transact()
        .await?
        .into_result()?;

    buyer
        .call(contract.id(), "purchase")
        .args_json(json!({
            "receiver_id": buyer.id(),
            "token_id": "sword",
            "amount": "1",
        }))
        .transact()
        .await?
        .into_result()?;

    assert_eq!(balance_of(&contract, &buyer, "sword").await?, 1);

    Ok(())
}
