use crate::domain::money::Balance;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("not authorized: {0}")]
    Authorization(String),
    #[error("payment failed due to insufficient balance, your balance: ${balance}")]
    InsufficientBalance { balance: Balance },
    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T, E = CheckoutError> = std::result::Result<T, E>;
