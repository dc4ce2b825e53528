//! Client facade over the simulated directory.
//!
//! # Module Organization
//!
//! * [`core`] - The shared [`MockClient`] handle, statistics and reset
//! * [`operations`] - Group, membership, role and user operations
//! * [`builder`] - [`MockClientBuilder`] for configuration and seed data

pub mod builder;
pub mod core;
pub mod operations;

pub use self::builder::MockClientBuilder;
pub use self::core::MockClient;
