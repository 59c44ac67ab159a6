//! Posts backend adapters - REST and in-memory.

mod http;
mod memory;

pub use http::{HttpApiConfig, HttpPostApi};
pub use memory::InMemoryPostApi;
