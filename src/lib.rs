//! Client for the company token vesting registry.
//!
//! Connects a signing wallet to the deployed registry, guards every call with
//! a chain check, and exposes the registry's reads and writes as session
//! operations.

pub mod blockchain;
pub mod config;
pub mod contract;
pub mod observability;
pub mod session;

pub use config::ClientConfig;
pub use contract::{OnchainRegistry, VestingContract};
pub use session::{Command, Notice, Session, SessionError};
