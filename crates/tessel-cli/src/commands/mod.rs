//! CLI command implementations.

pub mod authorizer;
pub mod index;
pub mod secrets;
