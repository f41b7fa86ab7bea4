use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

use crate::phase::Phase;

/// The instantiating sender becomes the controller.
#[cw_serde]
pub struct InstantiateMsg {
    pub complimentary_allotment: u64,
    pub supply_cap: Option<u64>,
    pub denom: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Seal a secret for `recipient`. Attach the exact price of the current phase.
    IssueSecret {
        recipient: String,
        content_id: String,
    },
    /// Flip the pause flag (controller only)
    TogglePause {},
    /// Send the whole contract balance to the controller (controller only)
    Withdraw {},
    /// Always rejected: secrets are non-transferable
    TransferNft {
        recipient: String,
        token_id: u64,
    },
    /// Always rejected: secrets are non-transferable
    SendNft {
        contract: String,
        token_id: u64,
        msg: cosmwasm_std::Binary,
    },
    /// Always rejected: secrets are non-transferable
    Approve {
        spender: String,
        token_id: u64,
    },
    /// Always rejected: secrets are non-transferable
    ApproveAll {
        operator: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    /// Phase the next issuance falls into, and its price
    #[returns(PhaseResponse)]
    Phase {},
    #[returns(NumTokensResponse)]
    TotalIssued {},
    #[returns(ComplimentaryPeriodResponse)]
    ComplimentaryPeriodEndedOn {},
    #[returns(DiscountedPeriodResponse)]
    DiscountedPeriodDuration {},
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u64 },
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Secrets held by `owner`
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Withdrawable balance and lifetime proceeds
    #[returns(FundsResponse)]
    Funds {},
}

#[cw_serde]
pub struct PhaseResponse {
    pub phase: Phase,
    pub price: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ComplimentaryPeriodResponse {
    /// `None` until the complimentary threshold is reached
    pub ended_on: Option<Timestamp>,
}

#[cw_serde]
pub struct DiscountedPeriodResponse {
    pub seconds: u64,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: u64,
    pub owner: String,
    pub content_id: String,
    pub token_uri: String,
    pub sealed_at: Timestamp,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct FundsResponse {
    pub balance: Uint128,
    pub total_raised: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}
