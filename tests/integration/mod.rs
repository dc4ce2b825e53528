//! Integration tests for the client facade.

pub mod concurrency;
pub mod property_tests;
