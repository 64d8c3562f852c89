//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flag overrides
//!     → validation.rs (semantic checks, once)
//!     → ClientConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file means the Sepolia deployment
//! - Validation separates syntactic (serde) from semantic checks
//! - Signing keys never live in the config file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{finalize, load_config, load_or_default, read_config, read_or_default, ConfigError};
pub use schema::ClientConfig;
pub use schema::ContractConfig;
pub use schema::NetworkConfig;
pub use schema::ObservabilityConfig;
