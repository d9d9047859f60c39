//! User records, validation and summaries for the tooling demo.
//!
//! Callers go through [`UsersInfo`] and the [`contract`] types. The domain
//! service and its gateway are public so the crate's integration tests can
//! reach them directly.

pub mod config;
pub mod contract;
pub mod module;

pub use contract::{client, error, model};
pub use module::UsersInfo;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
