// Application layer - validation and orchestration on top of the domain.
// Any client (HTTP API, tests) goes through LedgerService; the raw
// BillSplit state is never exposed for direct mutation.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
