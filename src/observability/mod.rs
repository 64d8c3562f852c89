//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields: operation, chain_id, tx_hash)
//!     → logging.rs (subscriber setup, stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
