//! Client side of the AI proxy endpoint.

mod client;

pub use client::HttpSageClient;
