use thiserror::Error;

pub mod booking;
pub mod contact;
pub mod location;
pub mod offer;
pub mod order;
pub mod rate;
pub mod search;
pub mod vehicle;
pub mod zone;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("price cannot be negative")]
    NegativePrice,
}
