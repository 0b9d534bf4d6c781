//! Browser access to the Bizzap API

pub mod client;

pub use client::{api_client, GlooTransport};
