//! # Board Core
//!
//! The domain layer of the Community Board client.
//! This crate holds the post model, the backend port and the page view states.
//! It performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod view;

pub use error::{ApiError, DomainError};
