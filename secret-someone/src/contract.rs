use cosmwasm_std::{
    entry_point, to_json_binary, BankMsg, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo,
    Order, Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::helpers::{
    assert_controller, assert_not_paused, assert_payment, assert_supply_available,
    format_token_uri, reject_funds, validate_recipient,
};
use crate::msg::{
    ComplimentaryPeriodResponse, DiscountedPeriodResponse, ExecuteMsg, FundsResponse,
    InstantiateMsg, MigrateMsg, NftInfoResponse, NumTokensResponse, OwnerOfResponse,
    PhaseResponse, QueryMsg, TokenUriResponse, TokensResponse,
};
use crate::phase::{complimentary_threshold_reached, Phase};
use crate::state::{
    Config, SecretData, COMPLIMENTARY_ENDED_ON, CONFIG, DISCOUNTED_PERIOD, OWNER_SECRETS,
    SECRETS, TOKEN_COUNT, TOTAL_RAISED,
};

const CONTRACT_NAME: &str = "crates.io:secret-someone";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    if msg.supply_cap == Some(0) {
        return Err(ContractError::InvalidSupplyCap);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        controller: info.sender,
        paused: false,
        complimentary_allotment: msg.complimentary_allotment,
        supply_cap: msg.supply_cap,
        denom: msg.denom,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    TOTAL_RAISED.save(deps.storage, &Uint128::zero())?;

    let supply_cap = config
        .supply_cap
        .map_or_else(|| "none".to_string(), |cap| cap.to_string());

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("controller", config.controller.as_str())
        .add_attribute(
            "complimentary_allotment",
            config.complimentary_allotment.to_string(),
        )
        .add_attribute("supply_cap", supply_cap))
}

// ─── Execute ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::IssueSecret {
            recipient,
            content_id,
        } => execute_issue_secret(deps, env, info, recipient, content_id),
        ExecuteMsg::TogglePause {} => execute_toggle_pause(deps, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::TransferNft { .. }
        | ExecuteMsg::SendNft { .. }
        | ExecuteMsg::Approve { .. }
        | ExecuteMsg::ApproveAll { .. } => Err(ContractError::NotTransferable),
    }
}

// ─── Execute: Issuance ──────────────────────────────────────────────────────

/// Check order: pause, recipient, supply cap, phase price. Every check runs
/// before the first write.
pub fn execute_issue_secret(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    content_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_paused(&config)?;
    let recipient = validate_recipient(deps.as_ref(), &recipient)?;

    let issued = TOKEN_COUNT.load(deps.storage)?;
    assert_supply_available(&config, issued)?;

    let now = env.block.time;
    let ended_on = COMPLIMENTARY_ENDED_ON.may_load(deps.storage)?;
    let phase = Phase::resolve(
        issued,
        config.complimentary_allotment,
        ended_on,
        now,
        DISCOUNTED_PERIOD,
    );
    let paid = assert_payment(&info, &config.denom, phase)?;

    let token_id = issued + 1;
    SECRETS.save(
        deps.storage,
        token_id,
        &SecretData {
            owner: recipient.clone(),
            content_id,
            sealed_at: now,
        },
    )?;
    OWNER_SECRETS.save(deps.storage, (&recipient, token_id), &Empty {})?;
    TOKEN_COUNT.save(deps.storage, &token_id)?;
    if !paid.is_zero() {
        TOTAL_RAISED.update(deps.storage, |raised| -> StdResult<_> {
            Ok(raised.checked_add(paid)?)
        })?;
    }

    let mut response = Response::new();
    if ended_on.is_none()
        && complimentary_threshold_reached(token_id, config.complimentary_allotment)
    {
        COMPLIMENTARY_ENDED_ON.save(deps.storage, &now)?;
        response = response.add_attribute("complimentary_ended_on", now.seconds().to_string());
    }

    let sealed = Event::new("secret_sealed")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("recipient", recipient.as_str());

    Ok(response
        .add_event(sealed)
        .add_attribute("action", "issue_secret")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("phase", phase.as_str())
        .add_attribute("paid", paid.to_string()))
}

// ─── Execute: Controller ────────────────────────────────────────────────────

pub fn execute_toggle_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = assert_controller(deps.as_ref(), &info.sender)?;
    reject_funds(&info)?;

    let paused = !config.paused;
    CONFIG.save(deps.storage, &Config { paused, ..config })?;

    Ok(Response::new()
        .add_attribute("action", "toggle_pause")
        .add_attribute("paused", paused.to_string()))
}

/// Drains the full balance to the controller. Works while paused.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = assert_controller(deps.as_ref(), &info.sender)?;
    reject_funds(&info)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    let amount = balance.amount;
    let msg = BankMsg::Send {
        to_address: config.controller.to_string(),
        amount: vec![balance],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "withdraw")
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", config.controller.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(query_config(deps)?),
        QueryMsg::Phase {} => Ok(query_phase(deps, env)?),
        QueryMsg::TotalIssued {} => Ok(query_total_issued(deps)?),
        QueryMsg::ComplimentaryPeriodEndedOn {} => Ok(query_complimentary_ended_on(deps)?),
        QueryMsg::DiscountedPeriodDuration {} => Ok(query_discounted_period()?),
        QueryMsg::TokenUri { token_id } => query_token_uri(deps, token_id),
        QueryMsg::NftInfo { token_id } => query_nft_info(deps, token_id),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => Ok(query_tokens(deps, owner, start_after, limit)?),
        QueryMsg::AllTokens { start_after, limit } => {
            Ok(query_all_tokens(deps, start_after, limit)?)
        }
        QueryMsg::Funds {} => Ok(query_funds(deps, env)?),
    }
}

fn load_secret(deps: Deps, token_id: u64) -> Result<SecretData, ContractError> {
    SECRETS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_phase(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let issued = TOKEN_COUNT.load(deps.storage)?;
    let ended_on = COMPLIMENTARY_ENDED_ON.may_load(deps.storage)?;
    let phase = Phase::resolve(
        issued,
        config.complimentary_allotment,
        ended_on,
        env.block.time,
        DISCOUNTED_PERIOD,
    );

    to_json_binary(&PhaseResponse {
        phase,
        price: phase.price(),
        denom: config.denom,
    })
}

pub fn query_total_issued(deps: Deps) -> StdResult<Binary> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    to_json_binary(&NumTokensResponse { count })
}

pub fn query_complimentary_ended_on(deps: Deps) -> StdResult<Binary> {
    let ended_on = COMPLIMENTARY_ENDED_ON.may_load(deps.storage)?;
    to_json_binary(&ComplimentaryPeriodResponse { ended_on })
}

pub fn query_discounted_period() -> StdResult<Binary> {
    to_json_binary(&DiscountedPeriodResponse {
        seconds: DISCOUNTED_PERIOD,
    })
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let secret = load_secret(deps, token_id)?;
    Ok(to_json_binary(&TokenUriResponse {
        token_uri: format_token_uri(&secret.content_id),
    })?)
}

pub fn query_nft_info(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let secret = load_secret(deps, token_id)?;
    Ok(to_json_binary(&NftInfoResponse {
        token_id,
        owner: secret.owner.to_string(),
        token_uri: format_token_uri(&secret.content_id),
        content_id: secret.content_id,
        sealed_at: secret.sealed_at,
    })?)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let secret = load_secret(deps, token_id)?;
    Ok(to_json_binary(&OwnerOfResponse {
        owner: secret.owner.to_string(),
    })?)
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = OWNER_SECRETS
        .prefix(&owner_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = SECRETS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_funds(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    let total_raised = TOTAL_RAISED.load(deps.storage)?;

    to_json_binary(&FundsResponse {
        balance,
        total_raised,
    })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
