pub mod contract;
pub mod error;
pub mod helpers;
pub mod msg;
pub mod phase;
pub mod state;

pub use crate::error::ContractError;
