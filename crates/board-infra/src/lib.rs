//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! - `HttpPostApi` talks to the REST backend over reqwest.
//! - `InMemoryPostApi` keeps posts in process memory, for tests and demos.

pub mod api;

pub use api::{HttpApiConfig, HttpPostApi, InMemoryPostApi};
