//! Rust client for the HR gateway.

mod client;

pub use client::{GatewayClient, GatewayReply};
