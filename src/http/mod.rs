//! HTTP client layer — `KongHttp` request pipeline and query encoding.

pub mod client;
pub mod query;

pub use client::{ApiResponse, KongHttp};
pub use query::with_query;
