pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod query;
pub mod resolver;
pub mod rpc;
pub mod slashing;
pub mod storage;
