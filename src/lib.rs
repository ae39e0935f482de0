//! tinyhttpd - Minimal HTTP/1.1 server
//!
//! Core library for request parsing, routing, and the accept loop.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
