//! Pick -> upload -> persist processing flow with commands

pub mod commands;
pub mod error;
pub mod types;

mod client;
mod picker;
mod state;
mod storage;
