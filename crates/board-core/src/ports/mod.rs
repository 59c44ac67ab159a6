//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod post_api;

pub use post_api::PostApi;
