use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Instantiating address; the only account that can pause or withdraw
    pub controller: Addr,
    /// Freezes issuance only. Withdrawals stay available.
    pub paused: bool,
    /// Number of free secrets, see `phase::complimentary_threshold_reached`
    pub complimentary_allotment: u64,
    /// Hard cap on total issuance, if any
    pub supply_cap: Option<u64>,
    /// Native denomination accepted as payment (e.g. "ushido")
    pub denom: String,
    pub name: String,
    pub symbol: String,
}

/// A sealed secret. Written once at issuance and never modified.
#[cw_serde]
pub struct SecretData {
    pub owner: Addr,
    /// Opaque content identifier (an IPFS CID in practice)
    pub content_id: String,
    pub sealed_at: Timestamp,
}

/// Price of a discounted-phase secret, in micro-units of `Config::denom`
pub const DISCOUNTED_PRICE: u128 = 14_000;

/// Price of a public-phase secret, in micro-units of `Config::denom`
pub const PUBLIC_PRICE: u128 = 27_000;

/// Length of the discounted phase, counted from the end of the complimentary phase (7 days)
pub const DISCOUNTED_PERIOD: u64 = 604_800;

pub const TOKEN_URI_PREFIX: &str = "ipfs://";

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// Latched once, when the complimentary threshold is first reached
pub const COMPLIMENTARY_ENDED_ON: Item<Timestamp> = Item::new("complimentary_ended_on");

/// Lifetime proceeds from paid issuance. Not reduced by withdrawals.
pub const TOTAL_RAISED: Item<Uint128> = Item::new("total_raised");

/// token_id -> SecretData
pub const SECRETS: Map<u64, SecretData> = Map::new("secrets");

/// (owner_addr, token_id) -> ()
pub const OWNER_SECRETS: Map<(&Addr, u64), Empty> = Map::new("owner_secrets");
