use cosmwasm_std::StdError;
use thiserror::Error;

use crate::phase::Phase;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("contract is paused")]
    Paused,

    #[error("invalid recipient: {address:?}")]
    InvalidRecipient { address: String },

    #[error("{}", .phase.payment_rejection())]
    WrongPayment { phase: Phase },

    #[error("secrets are non-transferable")]
    NotTransferable,

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("supply cap of {cap} secrets reached")]
    SupplyCapReached { cap: u64 },

    #[error("supply cap must be greater than zero")]
    InvalidSupplyCap,

    #[error("nothing to withdraw")]
    NothingToWithdraw,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
