mod term;

pub mod anvil;
pub mod cmd;
pub mod config;
pub mod forge;
pub mod wallets;

pub use term::{error, logger};
