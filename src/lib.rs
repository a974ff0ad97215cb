//! A tiny HTTP/1.0 client that streams a response body into a sink.
//!
//! See the `client` module for fetching.
//! See the `protocol` module for the request format and the streaming response parser.
//! See the `url` module for how urls are split into host and path.

pub mod client;
pub mod error;
pub mod io;
pub mod protocol;
pub mod sink;
pub mod url;

#[cfg(test)]
mod server;
