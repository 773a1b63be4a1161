//! Transport layer for the Tuesday SDK.

pub mod http;

pub use http::HttpTransport;
