//! # Board Shared
//!
//! Wire types exchanged with the posts backend.

pub mod dto;

pub use dto::{ErrorBody, PostRequest, PostResponse};
