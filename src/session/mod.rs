//! Session subsystem: the connection manager, read and write operations, and
//! the ephemeral state they mutate.
//!
//! # Data Flow
//! ```text
//! Command (raw inputs)
//!     → operations.rs (validate, busy flag, network guard, contract call)
//!     → state.rs (form fields, results, busy flags)
//!     → Notice or SessionError
//! ```
//!
//! # Design Decisions
//! - One operation at a time: operations take `&mut self`
//! - Busy flags are cleared on every path once set
//! - Failed operations never overwrite earlier results

pub mod command;
pub mod error;
pub mod operations;
pub mod state;

pub use command::{Command, Confirmation, Notice};
pub use error::{SessionError, SessionResult};
pub use operations::Session;
pub use state::{BusyFlags, BusyKind, ConnectionState, FormFields, QueryResults, UiState};
