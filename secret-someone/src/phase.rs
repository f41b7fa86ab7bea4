//! Pricing phases.
//!
//! Issuance moves through three phases, strictly in order:
//!
//! 1. `Complimentary` until the complimentary threshold is reached. The block
//!    time of the issuance that reaches it is latched as the end of the phase.
//! 2. `Discounted` for `DISCOUNTED_PERIOD` seconds after the latched time.
//! 3. `Public` from then on.
//!
//! The threshold counts each complimentary secret as half a unit: it is
//! reached once `issued / 2 >= allotment`, so an allotment of 10 covers the
//! first 20 issuances.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Timestamp, Uint128};

use crate::state::{DISCOUNTED_PRICE, PUBLIC_PRICE};

pub const COMPLIMENTARY_WEIGHT_DIVISOR: u64 = 2;

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Phase {
    Complimentary,
    Discounted,
    Public,
}

impl Phase {
    pub fn resolve(
        issued: u64,
        allotment: u64,
        ended_on: Option<Timestamp>,
        now: Timestamp,
        discounted_period: u64,
    ) -> Self {
        match ended_on {
            None if !complimentary_threshold_reached(issued, allotment) => Phase::Complimentary,
            // Threshold already met but not latched yet (zero allotment):
            // this call latches, so it starts the discounted window.
            None => Phase::Discounted,
            Some(ended) if now < ended.plus_seconds(discounted_period) => Phase::Discounted,
            Some(_) => Phase::Public,
        }
    }

    /// Exact amount that must be attached to an issuance in this phase.
    pub fn price(&self) -> Uint128 {
        match self {
            Phase::Complimentary => Uint128::zero(),
            Phase::Discounted => Uint128::new(DISCOUNTED_PRICE),
            Phase::Public => Uint128::new(PUBLIC_PRICE),
        }
    }

    pub fn payment_rejection(&self) -> &'static str {
        match self {
            Phase::Complimentary => "payment not allowed in complimentary phase",
            Phase::Discounted => "incorrect discounted price",
            Phase::Public => "incorrect public price",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Complimentary => "complimentary",
            Phase::Discounted => "discounted",
            Phase::Public => "public",
        }
    }
}

pub fn complimentary_threshold_reached(issued: u64, allotment: u64) -> bool {
    issued / COMPLIMENTARY_WEIGHT_DIVISOR >= allotment
}
