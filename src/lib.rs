//! Euroscout library — basketball entity harvester.
//!
//! This library crate exposes the core modules for integration testing.

pub mod dataset;
pub mod defense;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod mock;
pub mod pipeline;
pub mod position;
pub mod resolve;
pub mod store;
