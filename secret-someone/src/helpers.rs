use cosmwasm_std::{Addr, Deps, MessageInfo, Uint128};

use crate::error::ContractError;
use crate::phase::Phase;
use crate::state::{Config, CONFIG, TOKEN_URI_PREFIX};

pub fn assert_controller(deps: Deps, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.controller {
        return Err(ContractError::Unauthorized {
            role: "controller".to_string(),
        });
    }
    Ok(config)
}

pub fn assert_not_paused(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Validate the recipient of a new secret. Empty and malformed addresses are
/// treated as the null address.
pub fn validate_recipient(deps: Deps, recipient: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(recipient)
        .map_err(|_| ContractError::InvalidRecipient {
            address: recipient.to_string(),
        })
}

pub fn assert_supply_available(config: &Config, issued: u64) -> Result<(), ContractError> {
    if let Some(cap) = config.supply_cap {
        if issued >= cap {
            return Err(ContractError::SupplyCapReached { cap });
        }
    }
    Ok(())
}

/// Check that the attached funds are exactly the price of `phase`.
/// Returns the amount paid.
pub fn assert_payment(
    info: &MessageInfo,
    denom: &str,
    phase: Phase,
) -> Result<Uint128, ContractError> {
    let price = phase.price();
    let wrong_payment = ContractError::WrongPayment { phase };

    let paid: Vec<_> = info.funds.iter().filter(|c| !c.amount.is_zero()).collect();
    if price.is_zero() {
        if !paid.is_empty() {
            return Err(wrong_payment);
        }
        return Ok(Uint128::zero());
    }

    match paid.as_slice() {
        [coin] if coin.denom == denom && coin.amount == price => Ok(coin.amount),
        _ => Err(wrong_payment),
    }
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

pub fn format_token_uri(content_id: &str) -> String {
    format!("{}{}", TOKEN_URI_PREFIX, content_id)
}
